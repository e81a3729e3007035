//! Error types for the PODR client.
//!
//! This module defines all error types using `thiserror`. The taxonomy is
//! deliberately small: a missing credential, a connection failure, a query
//! failure. Every class is fatal - the program prints a message and exits
//! with a status code specific to the class.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodrError {
    #[error("Missing credential: environment variable '{variable}' is not set")]
    MissingCredential { variable: String },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Query failed: {message}")]
    Query {
        message: String,
        /// e.g., "42P01" for undefined table
        sql_state: Option<String>,
    },

    #[error("Timeout: {operation} exceeded {elapsed_secs}s")]
    Timeout {
        operation: String,
        elapsed_secs: u64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PodrError {
    /// Create a missing credential error naming the environment variable.
    pub fn missing_credential(variable: impl Into<String>) -> Self {
        Self::MissingCredential {
            variable: variable.into(),
        }
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with optional SQLSTATE.
    pub fn query(message: impl Into<String>, sql_state: Option<String>) -> Self {
        Self::Query {
            message: message.into(),
            sql_state,
        }
    }

    /// Create a timeout error.
    pub fn timeout(operation: impl Into<String>, elapsed_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            elapsed_secs,
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Process exit status for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCredential { .. } => 2,
            Self::Connection { .. } => 3,
            Self::Query { .. } | Self::Timeout { .. } => 4,
            Self::Io(_) | Self::Internal { .. } => 1,
        }
    }

    /// The line printed to stderr before the process exits.
    ///
    /// Connection failures get a generic message; the underlying detail is
    /// logged separately so credentials never leak into terminal scrollback.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential { variable } => {
                format!("Please set the environment variable '{variable}'.")
            }
            Self::Connection { .. } => {
                "There was an error connecting to PHUSE's Open Data Repository.".to_string()
            }
            Self::Query {
                message, sql_state, ..
            } => match sql_state {
                Some(code) => format!("Query failed: {message} (SQLSTATE: {code})"),
                None => format!("Query failed: {message}"),
            },
            other => other.to_string(),
        }
    }
}

/// Convert sqlx errors to PodrError.
impl From<sqlx::Error> for PodrError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(msg) => PodrError::connection(msg.to_string()),
            sqlx::Error::Io(io_err) => PodrError::connection(format!("I/O error: {io_err}")),
            sqlx::Error::Tls(tls_err) => PodrError::connection(format!("TLS error: {tls_err}")),
            sqlx::Error::Protocol(msg) => PodrError::connection(format!("Protocol error: {msg}")),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                PodrError::query(db_err.message().to_string(), code)
            }
            sqlx::Error::RowNotFound => PodrError::query("No rows returned", None),
            sqlx::Error::ColumnNotFound(col) => {
                PodrError::query(format!("Column not found: {col}"), None)
            }
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => PodrError::internal(format!(
                "Column index {index} out of bounds (len: {len})"
            )),
            sqlx::Error::ColumnDecode { index, source } => {
                PodrError::internal(format!("Failed to decode column {index}: {source}"))
            }
            sqlx::Error::Decode(source) => PodrError::internal(format!("Decode error: {source}")),
            sqlx::Error::WorkerCrashed => PodrError::internal("Database worker crashed"),
            _ => PodrError::internal(format!("Unknown database error: {err}")),
        }
    }
}

/// Result type alias for PODR client operations.
pub type PodrResult<T> = Result<T, PodrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_variable() {
        let err = PodrError::missing_credential("PHUSE_User");
        assert!(err.to_string().contains("PHUSE_User"));
        assert!(err.user_message().contains("PHUSE_User"));
    }

    #[test]
    fn test_connection_user_message_is_generic() {
        let err = PodrError::connection("password authentication failed for user \"x\"");
        assert!(!err.user_message().contains("password"));
        assert!(err.user_message().contains("Open Data Repository"));
    }

    #[test]
    fn test_query_user_message_includes_sql_state() {
        let err = PodrError::query("relation does not exist", Some("42P01".to_string()));
        assert!(err.user_message().contains("42P01"));
    }

    #[test]
    fn test_exit_codes_distinct_per_class() {
        assert_eq!(PodrError::missing_credential("X").exit_code(), 2);
        assert_eq!(PodrError::connection("nope").exit_code(), 3);
        assert_eq!(PodrError::query("bad", None).exit_code(), 4);
        assert_eq!(PodrError::timeout("query execution", 30).exit_code(), 4);
        assert_eq!(PodrError::internal("boom").exit_code(), 1);
    }

    #[test]
    fn test_sqlx_configuration_maps_to_connection() {
        let err: PodrError = sqlx::Error::Configuration("bad options".into()).into();
        assert!(matches!(err, PodrError::Connection { .. }));
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_query() {
        let err: PodrError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, PodrError::Query { .. }));
    }

    #[test]
    fn test_sqlx_column_not_found_maps_to_query() {
        let err: PodrError = sqlx::Error::ColumnNotFound("drugname".to_string()).into();
        assert!(matches!(err, PodrError::Query { .. }));
        assert!(err.to_string().contains("drugname"));
    }
}
