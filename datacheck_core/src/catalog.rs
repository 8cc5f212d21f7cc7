//! Requirements catalog types.
//!
//! This module contains the types describing what a delivered data file is
//! expected to contain: one `FieldRequirement` per row of the external
//! requirements document, collected into an immutable `RequirementsCatalog`.

use serde::{Deserialize, Serialize};

/// A single field requirement from the requirements document.
///
/// One requirement is produced per row of the source document. The response
/// type is free text (e.g., "Yes/No", "Free Text", "Date"), so lookups match
/// on it loosely rather than against a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRequirement {
    /// Expected column name in delivered files
    pub name: String,

    /// Free-text classification of the field's expected value domain
    pub response_type: String,
}

/// An immutable, ordered catalog of field requirements.
///
/// Constructed once per run from the external requirements document and
/// shared read-only with every rule. Requirement order is preserved and
/// drives deterministic output ordering.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{FieldRequirement, RequirementsCatalog};
///
/// let catalog = RequirementsCatalog::from_requirements(vec![FieldRequirement {
///     name: "Active".to_string(),
///     response_type: "Yes/No (drop-down)".to_string(),
/// }]);
///
/// // Matching is a case-insensitive substring check.
/// assert_eq!(catalog.fields_matching("Yes/No"), vec!["Active"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequirementsCatalog {
    requirements: Vec<FieldRequirement>,
}

impl RequirementsCatalog {
    /// Creates a catalog from an ordered list of requirements.
    pub fn from_requirements(requirements: Vec<FieldRequirement>) -> Self {
        Self { requirements }
    }

    /// Returns the number of requirements in the catalog.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Returns true if the catalog has no requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Returns an iterator over the requirements in catalog order.
    pub fn requirements(&self) -> impl Iterator<Item = &FieldRequirement> {
        self.requirements.iter()
    }

    /// Returns, in catalog order, the names of all fields whose response type
    /// contains `predicate` case-insensitively.
    ///
    /// The response-type taxonomy is free text, so this is deliberately a
    /// substring match to tolerate minor wording variance ("Yes/No",
    /// "Yes/No (drop-down)", "yes/no"). Requirements with an empty or
    /// whitespace-only response type never match.
    pub fn fields_matching(&self, predicate: &str) -> Vec<&str> {
        let needle = predicate.to_lowercase();
        self.requirements
            .iter()
            .filter(|req| !req.response_type.trim().is_empty())
            .filter(|req| req.response_type.to_lowercase().contains(&needle))
            .map(|req| req.name.as_str())
            .collect()
    }
}
