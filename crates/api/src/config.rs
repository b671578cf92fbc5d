/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite store location (default: `sqlite:moviesData.db`).
    pub database_url: String,
    /// Connection pool size (default: `5`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                |
    /// |----------------------|------------------------|
    /// | `HOST`               | `0.0.0.0`              |
    /// | `PORT`               | `3000`                 |
    /// | `DATABASE_URL`       | `sqlite:moviesData.db` |
    /// | `DB_MAX_CONNECTIONS` | `5`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", lookup("PORT"), 3000)?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:moviesData.db".into());
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 5)?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
