//! Requirements catalog loading.
//!
//! The requirements document is a tabular CSV file with at least two columns,
//! `Attribute Field Name` and `Response Type`. A failure here is fatal for
//! the run: no data file is validated against a catalog that did not load.

use datacheck_core::{FieldRequirement, RequirementsCatalog};
use std::path::Path;
use thiserror::Error;

/// Header of the column holding expected field names.
pub const FIELD_NAME_COLUMN: &str = "Attribute Field Name";

/// Header of the column holding free-text response types.
pub const RESPONSE_TYPE_COLUMN: &str = "Response Type";

/// Errors that can occur while loading the requirements catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Requirements document missing or unreadable
    #[error("Failed to read requirements document: {0}")]
    Io(#[from] std::io::Error),

    /// Requirements document is not well-formed CSV
    #[error("Failed to parse requirements document: {0}")]
    Csv(#[from] csv::Error),

    /// A mandatory column is absent from the header row
    #[error("Requirements document is missing the '{column}' column")]
    MissingColumn {
        /// The absent column header
        column: String,
    },
}

/// Result type alias for catalog loading.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Loads the requirements catalog from a CSV document.
///
/// Rows are kept in document order. Rows with an empty field name are
/// skipped; an empty response type is kept (such requirements simply never
/// match a predicate).
///
/// # Errors
///
/// Returns [`CatalogError`] if the document cannot be read, is not valid
/// CSV, or lacks one of the mandatory columns.
pub fn load_catalog(path: &Path) -> CatalogResult<RequirementsCatalog> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parses the requirements catalog from CSV text.
pub fn parse_catalog(content: &str) -> CatalogResult<RequirementsCatalog> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, FIELD_NAME_COLUMN)?;
    let type_idx = column_index(&headers, RESPONSE_TYPE_COLUMN)?;

    let mut requirements = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let response_type = record.get(type_idx).unwrap_or("").trim();
        requirements.push(FieldRequirement {
            name: name.to_string(),
            response_type: response_type.to_string(),
        });
    }

    Ok(RequirementsCatalog::from_requirements(requirements))
}

fn column_index(headers: &csv::StringRecord, column: &str) -> CatalogResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| CatalogError::MissingColumn {
            column: column.to_string(),
        })
}
