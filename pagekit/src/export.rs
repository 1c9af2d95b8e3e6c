//! Table export to CSV and JSON.

use std::fs;
use std::path::{Path, PathBuf};

use pagedom::{Element, find_element};
use serde::Serialize;
use thiserror::Error;

use crate::table;

pub const DEFAULT_CSV_FILENAME: &str = "data.csv";
pub const DEFAULT_JSON_FILENAME: &str = "data.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize the table (header row first, then body rows) to CSV.
/// Every cell is quoted, with embedded quotes doubled. Returns None when the
/// table doesn't exist (silent no-op).
pub fn table_to_csv(root: &Element, table_id: &str) -> Option<String> {
    let tbl = find_element(root, table_id)?;

    let mut lines = Vec::new();
    if let Some(head) = table::head_of(tbl) {
        lines.push(csv_line(head));
    }
    if let Some(body) = table::body_of(tbl) {
        for row in body.content.children() {
            lines.push(csv_line(row));
        }
    }

    Some(lines.join("\n"))
}

fn csv_line(row: &Element) -> String {
    row.content
        .children()
        .iter()
        .map(|cell| format!("\"{}\"", cell.text_content().replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Pretty-print any serializable value as JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write the table as CSV into `dir`, using `filename` or the default.
/// Returns the written path, or Ok(None) when the table doesn't exist.
pub fn write_table_csv(
    root: &Element,
    table_id: &str,
    dir: &Path,
    filename: Option<&str>,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(csv) = table_to_csv(root, table_id) else {
        return Ok(None);
    };
    let path = dir.join(filename.unwrap_or(DEFAULT_CSV_FILENAME));
    fs::write(&path, csv)?;
    Ok(Some(path))
}

/// Write a serializable value as JSON into `dir`, using `filename` or the
/// default. Returns the written path.
pub fn write_json<T: Serialize>(
    value: &T,
    dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(filename.unwrap_or(DEFAULT_JSON_FILENAME));
    fs::write(&path, to_json(value)?)?;
    Ok(path)
}
