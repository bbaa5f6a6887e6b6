//! Environment configuration.

use thiserror::Error;

/// A configuration error at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    /// An environment variable holds an unparseable value.
    #[error("{name} is invalid: {message}")]
    Invalid {
        /// The variable name.
        name: &'static str,
        /// Why it failed to parse.
        message: String,
    },
}

/// Configuration common to every Quill service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// PostgreSQL connection string for the service's private store.
    pub database_url: String,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Base URL of the external event log.
    pub event_log_url: String,
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `HOST`, `PORT`, and `EVENT_LOG_URL` fall
    /// back to defaults (`default_port` differs per service).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is unset or `PORT` does not
    /// parse as a `u16`.
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(default_port, |name| std::env::var(name).ok())
    }

    fn from_lookup(
        default_port: u16,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                message: format!("{e}"),
            })?,
            None => default_port,
        };
        let event_log_url =
            lookup("EVENT_LOG_URL").unwrap_or_else(|| "http://localhost:4005".to_owned());

        Ok(Self {
            database_url,
            host,
            port,
            event_log_url,
        })
    }
}
