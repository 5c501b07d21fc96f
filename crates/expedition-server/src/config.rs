//! Configuration types for the server process.
//!
//! All configuration is loaded from environment variables. The server
//! needs to know how to reach `PostgreSQL` and which address to bind.

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Host address to bind the HTTP listener to.
    pub host: String,
    /// TCP port for the HTTP listener.
    pub port: u16,
    /// Maximum number of connections in the database pool.
    pub db_max_connections: u32,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable could not be parsed.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        /// The variable that failed to parse.
        name: &'static str,
        /// Why parsing failed.
        reason: String,
    },
}

impl ServerSettings {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `DATABASE_URL` -- `PostgreSQL` connection string
    ///
    /// Optional variables:
    /// - `APP_HOST` -- bind address (default `0.0.0.0`)
    /// - `APP_PORT` -- listen port (default `5555`)
    /// - `DB_MAX_CONNECTIONS` -- pool size (default `10`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is absent or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_var("DATABASE_URL")?;

        let host = std::env::var("APP_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));

        let port: u16 = std::env::var("APP_PORT")
            .unwrap_or_else(|_| String::from("5555"))
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "APP_PORT",
                reason: format!("{e}"),
            })?;

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| String::from("10"))
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                reason: format!("{e}"),
            })?;

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
        })
    }
}

/// Read a required environment variable.
fn env_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}
