//! Dataset representation for validation.
//!
//! This module provides the in-memory model of one delivered file's tabular
//! content. Loaders normalize every source value into a single string-or-null
//! representation so rules never branch on the source format (CSV vs JSON).

use std::collections::HashMap;

/// A value in a dataset.
///
/// Heterogeneous sources (CSV strings, JSON scalars) are normalized to this
/// representation at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// Textual value
    Text(String),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Attempts to get this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            DataValue::Null => None,
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

/// A single row of data, keyed by column name.
pub type DataRow = HashMap<String, DataValue>;

/// A dataset holding one file's columns and rows.
///
/// The column sequence mirrors the source file's header line (or JSON key
/// order) exactly, including repeated names. Deduplication must NOT happen
/// during load: duplicate detection is itself a validation target.
///
/// Rows are keyed by column name, so a repeated header collapses within a
/// row; the first physical occurrence's value wins. The full occurrence list
/// stays visible in [`Dataset::columns`].
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<DataRow>,
}

impl Dataset {
    /// Creates a new empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset from a literal column sequence and rows.
    pub fn new(columns: Vec<String>, rows: Vec<DataRow>) -> Self {
        Self { columns, rows }
    }

    /// Returns the literal column sequence, duplicates retained.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the dataset has a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Returns an iterator over one column's values, row by row.
    ///
    /// Rows missing the column yield [`DataValue::Null`].
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DataValue> {
        static NULL: DataValue = DataValue::Null;
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&NULL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(pairs: &[(&str, DataValue)]) -> DataRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_data_value() {
        assert!(DataValue::Null.is_null());
        assert!(!DataValue::Text("x".into()).is_null());
        assert_eq!(DataValue::Text("x".into()).as_text(), Some("x"));
        assert_eq!(DataValue::Null.as_text(), None);
        assert_eq!(DataValue::from("hi"), DataValue::Text("hi".to_string()));
    }

    #[test]
    fn test_columns_preserve_duplicates() {
        let dataset = Dataset::new(
            vec!["A".into(), "B".into(), "A".into()],
            vec![row(&[("A", "1".into()), ("B", "2".into())])],
        );

        assert_eq!(dataset.columns(), &["A", "B", "A"]);
        assert!(dataset.has_column("A"));
        assert!(!dataset.has_column("C"));
    }

    #[test]
    fn test_column_values_missing_is_null() {
        let dataset = Dataset::new(
            vec!["A".into(), "B".into()],
            vec![
                row(&[("A", "1".into()), ("B", "2".into())]),
                row(&[("A", "3".into())]),
            ],
        );

        let values: Vec<&DataValue> = dataset.column_values("B").collect();
        assert_eq!(values, vec![&DataValue::Text("2".into()), &DataValue::Null]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.columns().is_empty());
        assert!(dataset.get_row(0).is_none());
    }
}
