//! Duplicate column detection.
//!
//! Test scenario 1: a delivered file must not declare the same column header
//! more than once. The dataset keeps the literal header sequence, so the
//! check works directly on [`Dataset::columns`].

use datacheck_core::{Dataset, RequirementsCatalog, Rule, RuleOutcome};
use std::collections::HashMap;

/// Result of the duplicate-column check for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateColumns {
    /// Whether any column name appears more than once
    pub has_duplicates: bool,

    /// Every occurrence of a repeated name, in column order.
    ///
    /// A name appearing three times contributes three entries, matching the
    /// header positions it occupies.
    pub occurrences: Vec<String>,
}

/// Checks a file's header for duplicated column names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateColumnRule;

impl DuplicateColumnRule {
    /// Creates a new duplicate-column rule.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the check against one dataset.
    pub fn check(&self, dataset: &Dataset) -> DuplicateColumns {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for column in dataset.columns() {
            *counts.entry(column.as_str()).or_insert(0) += 1;
        }

        let occurrences: Vec<String> = dataset
            .columns()
            .iter()
            .filter(|column| counts[column.as_str()] > 1)
            .cloned()
            .collect();

        DuplicateColumns {
            has_duplicates: !occurrences.is_empty(),
            occurrences,
        }
    }
}

impl Rule for DuplicateColumnRule {
    fn name(&self) -> &'static str {
        "Duplicate Columns Check"
    }

    fn evaluate(
        &self,
        file: &str,
        dataset: &Dataset,
        _catalog: &RequirementsCatalog,
    ) -> RuleOutcome {
        let result = self.check(dataset);
        if result.has_duplicates {
            RuleOutcome::fail(
                self.name(),
                file,
                format!(
                    "Duplicate columns found: [{}]",
                    result.occurrences.join(", ")
                ),
            )
        } else {
            RuleOutcome::pass(self.name(), file, "No duplicate columns found")
        }
    }
}
