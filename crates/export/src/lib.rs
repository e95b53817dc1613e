//! Export helpers for event tables in CSV and JSON.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One event line of an almanac table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub observer: String,
    /// Local civil date, `YYYY-MM-DD`.
    pub date: String,
    /// `rise`, `set`, `twilight_begin`, `upper_culmination`, …
    pub event: String,
    /// Local civil time `HH:MM:SS`, empty when the event does not occur.
    pub time_local: String,
    #[serde(default)]
    pub note: String,
}

/// Errors surfaced while writing exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write rows as CSV with a header line.
pub fn write_events_csv<W: Write>(writer: W, rows: &[EventRow]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct EventEnvelope<'a> {
    generator: &'a str,
    count: usize,
    events: &'a [EventRow],
}

/// Write rows as a pretty-printed JSON envelope.
pub fn write_events_json<W: Write>(mut writer: W, rows: &[EventRow]) -> Result<(), ExportError> {
    let envelope = EventEnvelope {
        generator: concat!("sky_almanac ", env!("CARGO_PKG_VERSION")),
        count: rows.len(),
        events: rows,
    };
    serde_json::to_writer_pretty(&mut writer, &envelope)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
