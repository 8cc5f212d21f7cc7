//! Validation outcomes and the run report.

use serde::{Deserialize, Serialize};

/// The result of running one rule against one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Name of the rule that produced this outcome
    pub rule_name: String,

    /// Identifier of the file that was checked (typically its file name)
    pub file: String,

    /// Whether the file passed this rule
    pub passed: bool,

    /// Human-readable diagnostic detail
    pub detail: String,
}

impl RuleOutcome {
    /// Creates a passing outcome.
    pub fn pass(rule_name: impl Into<String>, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            file: file.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    /// Creates a failing outcome.
    pub fn fail(rule_name: impl Into<String>, file: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            file: file.into(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Ordered, append-only collection of all outcomes for one validation run.
///
/// Owned by the engine while a run is in progress, then handed off by value
/// to the caller and treated as immutable by renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    outcomes: Vec<RuleOutcome>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outcome to the report.
    pub fn push(&mut self, outcome: RuleOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if no outcomes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns an iterator over the outcomes in record order.
    pub fn outcomes(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter()
    }

    /// Returns true if every recorded outcome passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Returns the failing outcomes in record order.
    pub fn failures(&self) -> Vec<&RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed).collect()
    }
}
