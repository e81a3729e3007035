//! PODR connection lifecycle.
//!
//! PODR allows a single connection per account, so the client owns exactly
//! one `PgConnection` rather than a pool. `close` consumes the client, which
//! makes closing twice unrepresentable.

use crate::config::{Config, Credentials};
use crate::error::{PodrError, PodrResult};
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use tokio::time::timeout;
use tracing::{debug, info};

pub struct PodrClient {
    conn: PgConnection,
    server_version: Option<String>,
}

impl PodrClient {
    /// Open a session to PODR with the given credentials.
    ///
    /// The connect attempt runs under the configured timeout. Once open, the
    /// session is pinned read-only server-side; this client never writes.
    pub async fn connect(config: &Config, credentials: &Credentials) -> PodrResult<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.dbname)
            .username(&credentials.username)
            .password(&credentials.password)
            .ssl_mode(config.ssl_mode.into());

        debug!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            ssl_mode = %config.ssl_mode,
            "Opening connection"
        );

        let mut conn = match timeout(
            config.connect_timeout_duration(),
            PgConnection::connect_with(&options),
        )
        .await
        {
            Ok(result) => result.map_err(PodrError::from)?,
            Err(_) => {
                return Err(PodrError::timeout(
                    "connection attempt",
                    config.connect_timeout,
                ));
            }
        };

        sqlx::query("SET default_transaction_read_only = on")
            .execute(&mut conn)
            .await?;

        // Best effort - a failure here is not worth aborting the run.
        let server_version = sqlx::query_scalar::<_, String>("SELECT version()")
            .fetch_one(&mut conn)
            .await
            .ok();

        info!(server_version = ?server_version, "Connected to PostgreSQL");

        Ok(Self {
            conn,
            server_version,
        })
    }

    /// Mutable access to the underlying connection for query execution.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    pub fn server_version(&self) -> Option<&str> {
        self.server_version.as_deref()
    }

    /// Close the session.
    pub async fn close(self) -> PodrResult<()> {
        self.conn.close().await?;
        info!("Connection closed");
        Ok(())
    }
}
