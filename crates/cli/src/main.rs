//! `flightdesk` -- interactive flight lookup.
//!
//! Looks up flights by ID, date, airline or origin airport in a SQLite
//! flights store and optionally exports the results to CSV.
//!
//! # Environment variables
//!
//! | Variable             | Default                         | Description                     |
//! |----------------------|---------------------------------|---------------------------------|
//! | `DATABASE_URL`       | `sqlite://data/flights.sqlite3` | Flights store                   |
//! | `DB_MAX_CONNECTIONS` | `1`                             | Pool size                       |
//! | `DATABASE_READ_ONLY` | `true`                          | Open the store read-only        |
//! | `EXPORT_DIR`         | `.`                             | Base directory for CSV exports  |
//! | `RUST_LOG`           | `flightdesk_cli=info,flightdesk_db=info` | Log filter (stderr)    |

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flightdesk_cli::config::AppConfig;
use flightdesk_cli::menu::Session;
use flightdesk_cli::service::FlightLookup;
use flightdesk_db::FlightStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flightdesk_cli=info,flightdesk_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;

    let pool = flightdesk_db::create_pool(
        &config.database_url,
        config.max_connections,
        config.read_only,
    )
    .await
    .with_context(|| format!("Failed to open flights store at {}", config.database_url))?;

    flightdesk_db::health_check(&pool)
        .await
        .context("Flights store health check failed")?;
    tracing::info!(database_url = %config.database_url, "Flights store ready");

    let lookup = FlightLookup::new(FlightStore::new(pool), config.export_dir);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&lookup, stdin.lock(), stdout.lock()).run().await?;

    tracing::info!("Session ended");
    Ok(())
}
