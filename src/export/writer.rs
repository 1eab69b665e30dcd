use super::rows::CsvTable;
use crate::constants::tables::TIMESTAMP_FORMAT;
use crate::error::AppError;
use chrono::Local;
use csv::WriterBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Local time as `YYYYMMDD_HHMMSS`, the suffix of every output file.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// `<dir>/<name>_<timestamp>.csv`
fn table_path(dir: &Path, name: &str, timestamp: &str) -> PathBuf {
    dir.join(format!("{name}_{timestamp}.csv"))
}

/// Writes `rows` to `<dir>/<T::NAME>_<timestamp>.csv` and returns the path.
///
/// The header row is always written, even for an empty table. The output
/// directory is created if missing. An existing file with the same name is
/// overwritten.
pub fn write_table<T: CsvTable>(
    dir: &Path,
    timestamp: &str,
    rows: &[T],
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let path = table_path(dir, T::NAME, timestamp);

    let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}
