//! The two fixed read-only queries this client runs.
//!
//! - `tables`: list every table in PODR's public schema
//! - `adverse_events`: print a sample of FDA adverse-event records
//!
//! Both stream rows from a forward-only cursor and write each line to the
//! output sink as it arrives.

pub mod adverse_events;
pub mod format;
pub mod tables;

use crate::config::Config;
use crate::error::PodrResult;
use sqlx::postgres::PgConnection;
use std::io::Write;
use tracing::info;

/// Run both queries in sequence, writing labeled listings to `out`.
pub async fn run_report<W: Write>(
    conn: &mut PgConnection,
    config: &Config,
    out: &mut W,
) -> PodrResult<()> {
    writeln!(out, "\n\nList of all available tables in PODR:")?;
    let table_count = tables::list_tables(conn, config, out).await?;
    info!(count = table_count, "Table listing complete");

    writeln!(
        out,
        "\n\n{} Adverse Events from FDA's AERS, table '{}':",
        config.effective_limit(),
        adverse_events::AERS_DRUG_TABLE
    )?;
    let event_count = adverse_events::list_adverse_events(conn, config, out).await?;
    info!(
        count = event_count,
        drug_name = %config.drug_name,
        "Adverse-event listing complete"
    );

    Ok(())
}
