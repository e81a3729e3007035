//! Adverse-event listing.
//!
//! Prints a limited sample of rows from FDA's Adverse Event Reporting System
//! dataset hosted in PODR, filtered to one drug name. The drug name and row
//! limit are bound as query parameters rather than spliced into the SQL.

use crate::config::Config;
use crate::db::RowToText;
use crate::error::{PodrError, PodrResult};
use crate::queries::format::format_row_line;
use futures_util::TryStreamExt;
use sqlx::postgres::PgConnection;
use std::io::Write;
use tokio::time::timeout;
use tracing::debug;

/// The FDA AERS drug table in PODR.
pub const AERS_DRUG_TABLE: &str = "nihpo_fda_aers_drug";

/// Columns of interest, in the fixed order they are printed.
pub const AERS_DRUG_COLUMNS: [&str; 20] = [
    "caseid",
    "cum_dose_chr",
    "cum_dose_unit",
    "dechal",
    "dose_amt",
    "dose_form",
    "dose_freq",
    "dose_unit",
    "dose_vbm",
    "drug_seq",
    "drugname",
    "exp_dt",
    "lot_num",
    "nda_num",
    "primaryid",
    "prod_ai",
    "rechal",
    "role_cod",
    "route",
    "val_vbm",
];

/// Build the fixed SELECT with drug name and limit as bound parameters.
pub fn select_sql() -> String {
    format!(
        "SELECT {} FROM {} WHERE drugname = $1 LIMIT $2",
        AERS_DRUG_COLUMNS.join(", "),
        AERS_DRUG_TABLE
    )
}

/// Stream the matching adverse-event rows, writing one delimited line per
/// row as it arrives. Returns the number of rows printed.
pub async fn list_adverse_events<W: Write>(
    conn: &mut PgConnection,
    config: &Config,
    out: &mut W,
) -> PodrResult<usize> {
    let sql = select_sql();
    let limit = config.effective_limit();

    debug!(
        sql = %sql,
        drug_name = %config.drug_name,
        limit = limit,
        "Executing adverse-event query"
    );

    let fetch = async {
        let mut stream = sqlx::query(&sql)
            .bind(&config.drug_name)
            .bind(i64::from(limit))
            .fetch(&mut *conn);
        let mut count = 0usize;
        while let Some(row) = stream.try_next().await? {
            writeln!(out, "{}", format_row_line(&row.text_values()))?;
            count += 1;
        }
        Ok::<usize, PodrError>(count)
    };

    match timeout(config.query_timeout_duration(), fetch).await {
        Ok(count) => count,
        Err(_) => Err(PodrError::timeout(
            "adverse-event listing",
            config.query_timeout,
        )),
    }
}
