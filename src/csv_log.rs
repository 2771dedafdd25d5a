// src/csv_log.rs
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::debug;

/// Log file that [`log_experiment`] appends to, relative to the process
/// working directory.
pub const EXPERIMENT_LOG_FILE: &str = "experiment_log.csv";

/// Appends `row` to `file_name` as a single CSV row.
///
/// The file is created when absent and existing content is never touched.
/// The handle is released before returning, on every exit path. Appenders
/// in separate processes are not coordinated; rows may interleave.
pub fn append_row<P, I, T>(file_name: P, row: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name.as_ref())
        .with_context(|| {
            format!(
                "Failed to open {} for append",
                file_name.as_ref().display()
            )
        })?;

    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(row)?;
    writer.flush()?;
    Ok(())
}

/// Appends one row with `record`'s values in `field_names` order.
///
/// Record keys outside `field_names` are silently dropped; a declared
/// field missing from the record writes a blank cell.
pub fn append_named_row<P: AsRef<Path>>(
    file_name: P,
    record: &HashMap<String, String>,
    field_names: &[&str],
) -> Result<()> {
    let row: Vec<&str> = field_names
        .iter()
        .map(|name| record.get(*name).map(String::as_str).unwrap_or(""))
        .collect();

    debug!(
        "Appending {} fields to {}",
        row.len(),
        file_name.as_ref().display()
    );
    append_row(file_name, row)
}

/// Records one experiment run in [`EXPERIMENT_LOG_FILE`].
///
/// Inserts `run_id` into `record` under the reserved `id` key, overwriting
/// any value already there; the mutation is visible to the caller.
pub fn log_experiment(
    run_id: &str,
    record: &mut HashMap<String, String>,
    csv_header: &[&str],
) -> Result<()> {
    record.insert("id".to_string(), run_id.to_string());
    append_named_row(EXPERIMENT_LOG_FILE, record, csv_header)
}
