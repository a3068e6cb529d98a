use std::path::PathBuf;

/// Default store location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/flights.sqlite3";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite URL of the flights store.
    pub database_url: String,
    /// Pool size. Lookups run one at a time, so one connection is enough.
    pub max_connections: u32,
    /// Open the store without write access.
    pub read_only: bool,
    /// Directory that relative export file names resolve against.
    pub export_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: '{value}'")]
    Invalid { var: &'static str, value: String },
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var              | Default                          |
    /// |----------------------|----------------------------------|
    /// | `DATABASE_URL`       | `sqlite://data/flights.sqlite3`  |
    /// | `DB_MAX_CONNECTIONS` | `1`                              |
    /// | `DATABASE_READ_ONLY` | `true`                           |
    /// | `EXPORT_DIR`         | `.`                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "DB_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => 1,
        };

        let read_only = match lookup("DATABASE_READ_ONLY") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                var: "DATABASE_READ_ONLY",
                value,
            })?,
            None => true,
        };

        let export_dir = lookup("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            database_url,
            max_connections,
            read_only,
            export_dir,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
