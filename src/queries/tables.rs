//! Table listing.

use crate::config::Config;
use crate::error::{PodrError, PodrResult};
use futures_util::TryStreamExt;
use sqlx::Row;
use sqlx::postgres::PgConnection;
use std::io::Write;
use tokio::time::timeout;
use tracing::debug;

/// Catalog query: every table in the public schema.
pub const LIST_TABLES_SQL: &str = "SELECT table_name FROM information_schema.tables \
     WHERE table_schema = 'public' ORDER BY table_name";

/// Stream the table names, writing one per line as each row arrives.
/// Returns the number of tables listed.
pub async fn list_tables<W: Write>(
    conn: &mut PgConnection,
    config: &Config,
    out: &mut W,
) -> PodrResult<usize> {
    debug!(sql = LIST_TABLES_SQL, "Executing catalog query");

    let fetch = async {
        let mut stream = sqlx::query(LIST_TABLES_SQL).fetch(&mut *conn);
        let mut count = 0usize;
        while let Some(row) = stream.try_next().await? {
            let table_name: String = row.try_get("table_name")?;
            writeln!(out, "{table_name}")?;
            count += 1;
        }
        Ok::<usize, PodrError>(count)
    };

    match timeout(config.query_timeout_duration(), fetch).await {
        Ok(count) => count,
        Err(_) => Err(PodrError::timeout("table listing", config.query_timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_query_targets_public_schema() {
        assert!(LIST_TABLES_SQL.contains("information_schema.tables"));
        assert!(LIST_TABLES_SQL.contains("table_schema = 'public'"));
    }

    #[test]
    fn test_catalog_query_is_a_select() {
        assert!(LIST_TABLES_SQL.trim_start().starts_with("SELECT"));
    }
}
