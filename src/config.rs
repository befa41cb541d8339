//! Host configuration read from the environment.
//!
//! DESIGN
//! ======
//! Parsing goes through a key lookup function so tests can feed fixed maps
//! instead of mutating process-wide environment variables. `.env` is loaded
//! by `main` before `from_env` runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::types::ClientConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TIMEOUT_MS: u32 = 8000;

pub const PORT_VAR: &str = "PORT";
pub const BACKEND_URL_VAR: &str = "FITLOG_BACKEND_URL";
pub const BACKEND_ANON_KEY_VAR: &str = "FITLOG_BACKEND_ANON_KEY";
pub const SESSION_TIMEOUT_VAR: &str = "FITLOG_SESSION_TIMEOUT_MS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings for the host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL with any trailing `/` removed.
    pub backend_url: String,
    pub backend_anon_key: String,
    pub session_timeout_ms: u32,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |name: &'static str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match present(PORT_VAR) {
            Some(raw) => parse_number(PORT_VAR, raw)?,
            None => DEFAULT_PORT,
        };
        let session_timeout_ms = match present(SESSION_TIMEOUT_VAR) {
            Some(raw) => parse_number(SESSION_TIMEOUT_VAR, raw)?,
            None => DEFAULT_SESSION_TIMEOUT_MS,
        };
        let backend_url = present(BACKEND_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
        let backend_anon_key = present(BACKEND_ANON_KEY_VAR).ok_or(ConfigError::Missing(BACKEND_ANON_KEY_VAR))?;

        Ok(Self { port, backend_url, backend_anon_key, session_timeout_ms })
    }

    /// The subset handed to the browser at `/api/config`.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            backend_url: self.backend_url.clone(),
            anon_key: self.backend_anon_key.clone(),
            session_timeout_ms: self.session_timeout_ms,
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid { name, value: raw })
}
