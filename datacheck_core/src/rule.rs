//! The rule trait shared by all per-file checks.
//!
//! A rule is a pure function of (dataset, catalog) producing exactly one
//! [`RuleOutcome`]. The engine also needs deterministic outcomes for files it
//! could not turn into a dataset, so the trait carries defaults for the two
//! boundary conditions: an unsupported file format (a recoverable skip, the
//! rule passes leniently) and a load failure (the rule fails with the error
//! message as detail).

use crate::{Dataset, RequirementsCatalog, RuleOutcome};

/// A pure per-file check.
///
/// Implementations must not hold mutable state: the same dataset and catalog
/// must always yield the same outcome.
///
/// # Example
///
/// ```rust
/// use datacheck_core::{Dataset, RequirementsCatalog, Rule, RuleOutcome};
///
/// struct NonEmptyRule;
///
/// impl Rule for NonEmptyRule {
///     fn name(&self) -> &'static str {
///         "Non-Empty Check"
///     }
///
///     fn evaluate(
///         &self,
///         file: &str,
///         dataset: &Dataset,
///         _catalog: &RequirementsCatalog,
///     ) -> RuleOutcome {
///         if dataset.is_empty() {
///             RuleOutcome::fail(self.name(), file, "File has no rows")
///         } else {
///             RuleOutcome::pass(self.name(), file, "File has rows")
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Human-readable rule name used in reports.
    fn name(&self) -> &'static str;

    /// Evaluates the rule against one file's dataset.
    fn evaluate(
        &self,
        file: &str,
        dataset: &Dataset,
        catalog: &RequirementsCatalog,
    ) -> RuleOutcome;

    /// Outcome for a file whose format the loader does not support.
    ///
    /// Unsupported formats are a skip condition, not a failure: the rule
    /// passes with an explanatory detail.
    fn format_skipped(&self, file: &str) -> RuleOutcome {
        RuleOutcome::pass(self.name(), file, "Skipped: unsupported file format")
    }

    /// Outcome for a file that could not be loaded at all.
    fn load_failed(&self, file: &str, error: &str) -> RuleOutcome {
        RuleOutcome::fail(self.name(), file, format!("Error processing file: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct AlwaysPass;

    impl Rule for AlwaysPass {
        fn name(&self) -> &'static str {
            "Always Pass"
        }

        fn evaluate(
            &self,
            file: &str,
            _dataset: &Dataset,
            _catalog: &RequirementsCatalog,
        ) -> RuleOutcome {
            RuleOutcome::pass(self.name(), file, "ok")
        }
    }

    #[test]
    fn test_format_skipped_default_is_lenient() {
        let outcome = AlwaysPass.format_skipped("y_1.txt");
        assert!(outcome.passed);
        assert_eq!(outcome.rule_name, "Always Pass");
        assert_eq!(outcome.file, "y_1.txt");
        assert_eq!(outcome.detail, "Skipped: unsupported file format");
    }

    #[test]
    fn test_load_failed_default_carries_error() {
        let outcome = AlwaysPass.load_failed("y_1.csv", "permission denied");
        assert!(!outcome.passed);
        assert_eq!(outcome.detail, "Error processing file: permission denied");
    }
}
