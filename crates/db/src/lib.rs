use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod repositories;
pub mod rows;
pub mod store;

pub use store::FlightStore;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool for the flights store.
///
/// The pool is the store handle: it is opened once and every query borrows
/// a connection from it for the duration of that query only.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    read_only: bool,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.read_only(read_only);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the store answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
