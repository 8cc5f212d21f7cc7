//! Categorical "Yes/No" field validation.
//!
//! Test scenario 2: every field the requirements catalog declares as a
//! Yes/No response type must, where present in a file, contain only legal
//! values. Values are normalized (surrounding whitespace trimmed,
//! lower-cased) before comparison; missing/null values are skipped.

use datacheck_core::{Dataset, RequirementsCatalog, Rule, RuleOutcome};

/// Response-type predicate selecting the fields this rule checks.
const RESPONSE_TYPE_PREDICATE: &str = "Yes/No";

/// Legal values after trimming and lower-casing.
const LEGAL_VALUES: [&str; 2] = ["yes", "no"];

/// Result of the typed-field check for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedFields {
    /// Whether every checked field contained only legal values
    pub all_valid: bool,

    /// Fields with at least one illegal value, in catalog order.
    ///
    /// A field appears once no matter how many of its rows are invalid.
    pub invalid_fields: Vec<String>,
}

/// Validates catalog-declared Yes/No fields against their legal value set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedFieldRule;

impl TypedFieldRule {
    /// Creates a new typed-field rule.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the check against one dataset.
    ///
    /// Targets are the catalog fields whose response type matches the
    /// Yes/No predicate; targets absent from the file are ignored. A row
    /// value of null is skipped, anything else must normalize to a legal
    /// value.
    pub fn check(&self, dataset: &Dataset, catalog: &RequirementsCatalog) -> TypedFields {
        let mut invalid_fields = Vec::new();

        for target in catalog.fields_matching(RESPONSE_TYPE_PREDICATE) {
            if !dataset.has_column(target) {
                continue;
            }

            let has_invalid = dataset.column_values(target).any(|value| {
                value
                    .as_text()
                    .is_some_and(|text| !is_legal(text))
            });

            if has_invalid {
                invalid_fields.push(target.to_string());
            }
        }

        TypedFields {
            all_valid: invalid_fields.is_empty(),
            invalid_fields,
        }
    }
}

fn is_legal(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    LEGAL_VALUES.contains(&normalized.as_str())
}

impl Rule for TypedFieldRule {
    fn name(&self) -> &'static str {
        "Yes/No Fields Validation"
    }

    fn evaluate(
        &self,
        file: &str,
        dataset: &Dataset,
        catalog: &RequirementsCatalog,
    ) -> RuleOutcome {
        let result = self.check(dataset, catalog);
        if result.all_valid {
            RuleOutcome::pass(self.name(), file, "All Yes/No fields are valid")
        } else {
            RuleOutcome::fail(
                self.name(),
                file,
                format!(
                    "Invalid Yes/No fields found: [{}]",
                    result.invalid_fields.join(", ")
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacheck_core::{DataRow, DataValue, FieldRequirement};
    use pretty_assertions::assert_eq;

    fn catalog(fields: &[(&str, &str)]) -> RequirementsCatalog {
        RequirementsCatalog::from_requirements(
            fields
                .iter()
                .map(|(name, response_type)| FieldRequirement {
                    name: name.to_string(),
                    response_type: response_type.to_string(),
                })
                .collect(),
        )
    }

    fn single_column_dataset(column: &str, values: &[DataValue]) -> Dataset {
        let rows = values
            .iter()
            .map(|value| {
                let mut row = DataRow::new();
                row.insert(column.to_string(), value.clone());
                row
            })
            .collect();
        Dataset::new(vec![column.to_string()], rows)
    }

    #[test]
    fn test_normalized_values_are_valid() {
        let catalog = catalog(&[("Active", "Yes/No")]);
        let dataset = single_column_dataset(
            "Active",
            &[
                DataValue::Text("Yes".into()),
                DataValue::Text(" no ".into()),
                DataValue::Text("YES".into()),
                DataValue::Null,
            ],
        );

        let result = TypedFieldRule::new().check(&dataset, &catalog);
        assert!(result.all_valid);
        assert!(result.invalid_fields.is_empty());
    }

    #[test]
    fn test_invalid_field_reported_once() {
        let catalog = catalog(&[("Active", "Yes/No")]);
        let dataset = single_column_dataset(
            "Active",
            &[
                DataValue::Text("Maybe".into()),
                DataValue::Text("Unknown".into()),
                DataValue::Text("Yes".into()),
            ],
        );

        let result = TypedFieldRule::new().check(&dataset, &catalog);
        assert!(!result.all_valid);
        assert_eq!(result.invalid_fields, vec!["Active"]);
    }

    #[test]
    fn test_targets_absent_from_file_are_ignored() {
        let catalog = catalog(&[("Active", "Yes/No"), ("Enrolled", "Yes/No")]);
        let dataset = single_column_dataset("Active", &[DataValue::Text("Yes".into())]);

        let result = TypedFieldRule::new().check(&dataset, &catalog);
        assert!(result.all_valid);
    }

    #[test]
    fn test_non_yes_no_fields_not_checked() {
        let catalog = catalog(&[("Comment", "Free Text")]);
        let dataset = single_column_dataset("Comment", &[DataValue::Text("Maybe".into())]);

        let result = TypedFieldRule::new().check(&dataset, &catalog);
        assert!(result.all_valid);
    }

    #[test]
    fn test_invalid_fields_in_catalog_order() {
        let catalog = catalog(&[("Zeta", "Yes/No"), ("Alpha", "Yes/No")]);
        let mut row = DataRow::new();
        row.insert("Zeta".to_string(), DataValue::Text("bad".into()));
        row.insert("Alpha".to_string(), DataValue::Text("worse".into()));
        let dataset = Dataset::new(vec!["Alpha".to_string(), "Zeta".to_string()], vec![row]);

        let result = TypedFieldRule::new().check(&dataset, &catalog);
        assert_eq!(result.invalid_fields, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_outcome_details() {
        let rule = TypedFieldRule::new();
        let catalog = catalog(&[("Active", "Yes/No")]);

        let good = single_column_dataset("Active", &[DataValue::Text("No".into())]);
        let outcome = rule.evaluate("y_1.csv", &good, &catalog);
        assert!(outcome.passed);
        assert_eq!(outcome.detail, "All Yes/No fields are valid");

        let bad = single_column_dataset("Active", &[DataValue::Text("Maybe".into())]);
        let outcome = rule.evaluate("y_1.csv", &bad, &catalog);
        assert!(!outcome.passed);
        assert_eq!(outcome.detail, "Invalid Yes/No fields found: [Active]");
    }
}
