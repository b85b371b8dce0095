//! Startup check that the database has the tables and columns we query.

use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::models::{Measurement, Station, Table};
use super::session::Session;

/// Check that `T`'s table exists and has every declared column.
pub fn check_table<T: Table>(session: &Session) -> StoreResult<()> {
    let present = session.column_names(T::NAME)?;
    if present.is_empty() {
        return Err(StoreError::MissingTable { table: T::NAME });
    }

    let missing: Vec<&'static str> = T::COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.iter().any(|p| p.eq_ignore_ascii_case(column)))
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::MissingColumns {
            table: T::NAME,
            columns: missing,
        });
    }

    debug!(table = T::NAME, columns = present.len(), "table schema ok");
    Ok(())
}

/// Check both tables.
pub fn check_schema(session: &Session) -> StoreResult<()> {
    check_table::<Station>(session)?;
    check_table::<Measurement>(session)?;
    Ok(())
}
