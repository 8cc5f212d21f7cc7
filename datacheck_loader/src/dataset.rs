//! Data-file loading with extension-based format detection.
//!
//! Two formats are recognized: CSV (header row + records) and JSON (array of
//! flat key-value records). Anything else is a skip condition the engine
//! handles leniently, so [`detect_format`] returns an `Option` rather than an
//! error and [`load_file`] returns `Ok(None)` for unrecognized extensions.

use datacheck_core::{DataRow, DataValue, Dataset};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a data file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File missing or unreadable
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON content
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON content is not an array of flat key-value records
    #[error("JSON file is not an array of flat records: {0}")]
    NotRecordArray(String),
}

/// Result type alias for data-file loading.
pub type LoaderResult<T> = std::result::Result<T, LoaderError>;

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFileFormat {
    /// CSV with a header row (.csv)
    Csv,
    /// JSON array of flat records (.json)
    Json,
}

/// Detects the data file format from the file extension.
///
/// Returns `None` for unrecognized extensions; downstream rules treat that
/// as a lenient skip, not a failure.
pub fn detect_format(path: &Path) -> Option<DataFileFormat> {
    let extension = path.extension().and_then(|ext| ext.to_str())?;
    match extension.to_lowercase().as_str() {
        "csv" => Some(DataFileFormat::Csv),
        "json" => Some(DataFileFormat::Json),
        _ => None,
    }
}

/// Loads one data file into a dataset.
///
/// Returns `Ok(None)` when the extension is not a supported format. Any read
/// or parse failure is a [`LoaderError`]; the engine records it against the
/// file and continues with the batch.
pub fn load_file(path: &Path) -> LoaderResult<Option<Dataset>> {
    let Some(format) = detect_format(path) else {
        return Ok(None);
    };

    let content = std::fs::read_to_string(path)?;
    let dataset = match format {
        DataFileFormat::Csv => parse_csv(&content)?,
        DataFileFormat::Json => parse_json(&content)?,
    };
    Ok(Some(dataset))
}

/// Parses CSV text into a dataset.
///
/// The header row is taken literally: repeated names stay repeated in
/// [`Dataset::columns`]. Within each row map the first physical occurrence
/// of a repeated header wins. Empty fields normalize to [`DataValue::Null`].
pub fn parse_csv(content: &str) -> LoaderResult<Dataset> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = DataRow::new();
        for (idx, name) in columns.iter().enumerate() {
            let value = match record.get(idx) {
                Some(raw) if !raw.is_empty() => DataValue::Text(raw.to_string()),
                _ => DataValue::Null,
            };
            row.entry(name.clone()).or_insert(value);
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

/// Parses a JSON array of flat records into a dataset.
///
/// Columns are the union of record keys in first-seen order (serde_json is
/// built with `preserve_order`, so each record's own key order survives).
/// JSON `null` becomes [`DataValue::Null`]; other scalars are stringified so
/// rules never branch on the source format.
pub fn parse_json(content: &str) -> LoaderResult<Dataset> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let serde_json::Value::Array(records) = value else {
        return Err(LoaderError::NotRecordArray(
            "top-level value is not an array".to_string(),
        ));
    };

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::new();

    for (idx, record) in records.into_iter().enumerate() {
        let serde_json::Value::Object(map) = record else {
            return Err(LoaderError::NotRecordArray(format!(
                "element {idx} is not an object"
            )));
        };

        let mut row = DataRow::new();
        for (key, value) in map {
            if !columns.iter().any(|c| *c == key) {
                columns.push(key.clone());
            }
            row.insert(key, scalar_value(value, idx)?);
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn scalar_value(value: serde_json::Value, record_idx: usize) -> LoaderResult<DataValue> {
    match value {
        serde_json::Value::Null => Ok(DataValue::Null),
        serde_json::Value::String(s) => Ok(DataValue::Text(s)),
        serde_json::Value::Number(n) => Ok(DataValue::Text(n.to_string())),
        serde_json::Value::Bool(b) => Ok(DataValue::Text(b.to_string())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(LoaderError::NotRecordArray(format!(
                "element {record_idx} holds a nested value"
            )))
        }
    }
}
