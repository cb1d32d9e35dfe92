//! CSV export of record tables.

use serde::Serialize;
use std::path::Path;

/// Writes a table to `path`: one header row followed by one row per record.
///
/// The header row is written explicitly so that an empty table still
/// produces a file with the correct column set. Returns the number of data
/// rows written.
pub fn write_table<T: Serialize>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
) -> anyhow::Result<usize> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}
