//! Configuration handling for the PODR client.
//!
//! This module provides configuration management via CLI arguments and
//! environment variables. The connection target defaults to PODR's hosted
//! instance; credentials are only ever read from the environment.

use crate::error::{PodrError, PodrResult};
use clap::{Parser, ValueEnum};
use sqlx::postgres::PgSslMode;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "podr.phuse.global";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DBNAME: &str = "nihpo";
pub const DEFAULT_DRUG_NAME: &str = "IMURAN";

/// Default row limit for the adverse-event listing.
pub const DEFAULT_EVENT_LIMIT: u32 = 10;
/// Maximum allowed row limit.
pub const MAX_EVENT_LIMIT: u32 = 1000;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Environment variables holding the access details assigned by PHUSE.
pub const USERNAME_ENV: &str = "PHUSE_User";
pub const PASSWORD_ENV: &str = "PHUSE_Password";

/// SSL mode for the PostgreSQL session.
///
/// PODR's sample clients connect without TLS; `disable` is the default here.
/// Encrypted transport requires building with the `tls-native` or
/// `tls-rustls` feature and passing `--ssl-mode prefer|require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SslMode {
    /// No TLS (default)
    #[default]
    Disable,
    /// Try TLS, fall back to plaintext
    Prefer,
    /// Require TLS, fail otherwise
    Require,
}

impl std::fmt::Display for SslMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disable => write!(f, "disable"),
            Self::Prefer => write!(f, "prefer"),
            Self::Require => write!(f, "require"),
        }
    }
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        }
    }
}

/// Resolved database credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    /// Sensitive - never logged or printed.
    pub password: String,
}

/// Configuration for the PODR client.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "podr-client",
    about = "Connects to PHUSE's Open Data Repository and runs the sample read-only queries",
    version,
    author
)]
pub struct Config {
    /// Database host
    #[arg(long, default_value = DEFAULT_HOST, env = "PODR_HOST")]
    pub host: String,

    /// Database port
    #[arg(long, default_value_t = DEFAULT_PORT, env = "PODR_PORT")]
    pub port: u16,

    /// Database name
    #[arg(long, default_value = DEFAULT_DBNAME, env = "PODR_DBNAME")]
    pub dbname: String,

    /// Assigned username, read from the PHUSE_User environment variable
    #[arg(long, env = "PHUSE_User", hide = true)]
    pub username: Option<String>,

    /// Assigned password, read from the PHUSE_Password environment variable
    #[arg(long, env = "PHUSE_Password", hide = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Drug name filter for the adverse-event listing
    #[arg(long, default_value = DEFAULT_DRUG_NAME)]
    pub drug_name: String,

    /// Maximum adverse-event rows to print (max: 1000)
    #[arg(long, default_value_t = DEFAULT_EVENT_LIMIT)]
    pub limit: u32,

    /// SSL mode for the session (disable, prefer, require)
    #[arg(long, value_enum, default_value_t = SslMode::Disable)]
    pub ssl_mode: SslMode,

    /// Connection timeout in seconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout: u64,

    /// Query timeout in seconds
    #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_SECS)]
    pub query_timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "PODR_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "PODR_JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Create a default configuration (useful for testing).
    pub fn default_config() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dbname: DEFAULT_DBNAME.to_string(),
            username: None,
            password: None,
            drug_name: DEFAULT_DRUG_NAME.to_string(),
            limit: DEFAULT_EVENT_LIMIT,
            ssl_mode: SslMode::Disable,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
            query_timeout: DEFAULT_QUERY_TIMEOUT_SECS,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Resolve the credentials loaded from the environment.
    ///
    /// Fails before any connection attempt, naming the variable that is
    /// missing. The username is checked first, matching the order the
    /// variables are documented in.
    pub fn credentials(&self) -> PodrResult<Credentials> {
        let username = self
            .username
            .clone()
            .ok_or_else(|| PodrError::missing_credential(USERNAME_ENV))?;
        let password = self
            .password
            .clone()
            .ok_or_else(|| PodrError::missing_credential(PASSWORD_ENV))?;
        Ok(Credentials { username, password })
    }

    /// Get the effective row limit (with bounds checking).
    pub fn effective_limit(&self) -> u32 {
        self.limit.clamp(1, MAX_EVENT_LIMIT)
    }

    /// Get the connection timeout as a Duration.
    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Get the query timeout as a Duration.
    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dbname, DEFAULT_DBNAME);
        assert_eq!(config.drug_name, DEFAULT_DRUG_NAME);
        assert_eq!(config.limit, DEFAULT_EVENT_LIMIT);
        assert_eq!(config.ssl_mode, SslMode::Disable);
    }

    #[test]
    fn test_credentials_missing_username() {
        let config = Config {
            password: Some("secret".to_string()),
            ..Config::default()
        };
        let err = config.credentials().unwrap_err();
        assert!(matches!(err, PodrError::MissingCredential { .. }));
        assert!(err.to_string().contains(USERNAME_ENV));
    }

    #[test]
    fn test_credentials_missing_password() {
        let config = Config {
            username: Some("someone".to_string()),
            ..Config::default()
        };
        let err = config.credentials().unwrap_err();
        assert!(err.to_string().contains(PASSWORD_ENV));
    }

    #[test]
    fn test_credentials_present() {
        let config = Config {
            username: Some("someone".to_string()),
            password: Some("secret".to_string()),
            ..Config::default()
        };
        let creds = config.credentials().unwrap();
        assert_eq!(creds.username, "someone");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_effective_limit_bounds() {
        let mut config = Config::default();
        assert_eq!(config.effective_limit(), DEFAULT_EVENT_LIMIT);

        config.limit = 0;
        assert_eq!(config.effective_limit(), 1);

        config.limit = 99999;
        assert_eq!(config.effective_limit(), MAX_EVENT_LIMIT);
    }

    #[test]
    fn test_timeout_durations() {
        let config = Config {
            connect_timeout: 15,
            query_timeout: 60,
            ..Config::default()
        };
        assert_eq!(config.connect_timeout_duration(), Duration::from_secs(15));
        assert_eq!(config.query_timeout_duration(), Duration::from_secs(60));
    }

    #[test]
    fn test_ssl_mode_display() {
        assert_eq!(SslMode::Disable.to_string(), "disable");
        assert_eq!(SslMode::Prefer.to_string(), "prefer");
        assert_eq!(SslMode::Require.to_string(), "require");
    }
}
