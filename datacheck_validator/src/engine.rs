//! Main validation engine.
//!
//! The engine owns the ordered rule list and drives one pass over the file
//! set: load each file, run every rule, append one outcome per (file, rule)
//! pair. A file that cannot be loaded is logged and recorded as failing for
//! every rule; it never aborts the batch.

use crate::{DuplicateColumnRule, TypedFieldRule};
use datacheck_core::{RequirementsCatalog, Rule, ValidationReport};
use datacheck_loader::load_file;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Orchestrates rule evaluation across a file set.
///
/// # Example
///
/// ```rust
/// use datacheck_core::RequirementsCatalog;
/// use datacheck_validator::ValidationEngine;
///
/// let engine = ValidationEngine::new();
/// let catalog = RequirementsCatalog::default();
///
/// let report = engine.run(&[], &catalog);
/// assert!(report.is_empty());
/// ```
pub struct ValidationEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl ValidationEngine {
    /// Creates an engine with the standard rule set: duplicate columns
    /// first, then Yes/No field validation. Rule order is stable.
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(DuplicateColumnRule::new()),
            Box::new(TypedFieldRule::new()),
        ])
    }

    /// Creates an engine with a custom rule list.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Returns the names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Runs every rule against every file and collects the outcomes.
    ///
    /// Files are processed in input order. Per file, exactly one outcome is
    /// recorded per rule:
    ///
    /// - loaded dataset: each rule evaluates normally
    /// - unsupported format: each rule records its lenient skip outcome
    /// - load failure: logged, each rule records a failing outcome carrying
    ///   the error message, and the batch continues
    pub fn run(&self, files: &[PathBuf], catalog: &RequirementsCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for path in files {
            let file = file_identifier(path);
            match load_file(path) {
                Ok(Some(dataset)) => {
                    debug!(file = %file, rows = dataset.len(), "evaluating rules");
                    for rule in &self.rules {
                        report.push(rule.evaluate(&file, &dataset, catalog));
                    }
                }
                Ok(None) => {
                    debug!(file = %file, "unsupported format, rules skip leniently");
                    for rule in &self.rules {
                        report.push(rule.format_skipped(&file));
                    }
                }
                Err(error) => {
                    warn!(file = %file, %error, "failed to load file, continuing batch");
                    let message = error.to_string();
                    for rule in &self.rules {
                        report.push(rule.load_failed(&file, &message));
                    }
                }
            }
        }

        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The file identifier recorded in outcomes: the bare file name where one
/// exists, the full path otherwise.
fn file_identifier(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
