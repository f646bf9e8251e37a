//! CSV loading into a typed [`Frame`].
//!
//! Cells are read as text, normalized, and typed column-wise: a column
//! whose every non-empty cell parses as a number becomes a `Number`
//! column, everything else stays `Text`. Empty cells are `Missing`.
//! Date detection is left to signal extraction, which handles
//! string-exported dates.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use tabula_model::{Column, Frame, Value};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a frame.
///
/// # Errors
///
/// Fails on IO errors or malformed CSV records.
pub fn read_csv_frame(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_frame_from(file).with_context(|| format!("failed to read {}", path.display()))
}

/// Read CSV content from any reader into a frame.
///
/// # Errors
///
/// Fails on malformed CSV records.
pub fn read_frame_from(reader: impl Read) -> Result<Frame> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("failed to read CSV header row")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read CSV record {row_idx}"))?;
        for (col_idx, column) in cells.iter_mut().enumerate() {
            let raw = record.get(col_idx).unwrap_or("");
            column.push(normalize_cell(raw));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw_values)| type_column(name, &raw_values))
        .collect();
    let frame = Frame::new(columns);
    debug!(
        rows = frame.n_rows(),
        columns = frame.n_columns(),
        "ingested CSV frame"
    );
    Ok(frame)
}

/// Type a raw text column: numeric when every non-empty cell parses.
fn type_column(name: String, raw_values: &[String]) -> Column {
    let non_empty: Vec<&String> = raw_values.iter().filter(|s| !s.is_empty()).collect();
    let numeric =
        !non_empty.is_empty() && non_empty.iter().all(|s| s.parse::<f64>().is_ok());

    let values = raw_values
        .iter()
        .map(|raw| {
            if raw.is_empty() {
                Value::Missing
            } else if numeric {
                // guarded by the all-parse check above
                Value::Number(raw.parse::<f64>().unwrap_or(f64::NAN))
            } else {
                Value::Text(raw.clone())
            }
        })
        .collect();
    Column::new(name, values)
}
