//! End-to-end engine tests over real files on disk.

use datacheck_core::{FieldRequirement, RequirementsCatalog};
use datacheck_validator::ValidationEngine;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn catalog() -> RequirementsCatalog {
    RequirementsCatalog::from_requirements(vec![
        FieldRequirement {
            name: "Active".to_string(),
            response_type: "Yes/No".to_string(),
        },
        FieldRequirement {
            name: "Name".to_string(),
            response_type: "Free Text".to_string(),
        },
    ])
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn duplicate_header_fails_structure_but_not_typed_check() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "y_1.csv", "Active,Active,Name\nYes,No,Bob\n");

    let report = ValidationEngine::new().run(&[file], &catalog());

    let outcomes: Vec<_> = report.outcomes().collect();
    assert_eq!(outcomes.len(), 2);

    let duplicate = outcomes[0];
    assert_eq!(duplicate.rule_name, "Duplicate Columns Check");
    assert!(!duplicate.passed);
    assert_eq!(duplicate.detail, "Duplicate columns found: [Active, Active]");

    // Row values merge under the repeated name (first occurrence wins), and
    // "Yes" is legal, so the typed check passes.
    let typed = outcomes[1];
    assert_eq!(typed.rule_name, "Yes/No Fields Validation");
    assert!(typed.passed);
}

#[test]
fn clean_csv_passes_both_rules() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "y_1.csv", "Active,Name\nYes,Bob\nno,Alice\n YES ,Eve\n");

    let report = ValidationEngine::new().run(&[file], &catalog());
    assert!(report.passed());
    assert_eq!(report.len(), 2);
}

#[test]
fn illegal_value_fails_typed_check_only() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "y_1.csv", "Active,Name\nYes,Bob\nMaybe,Alice\nMaybe,Eve\n");

    let report = ValidationEngine::new().run(&[file], &catalog());

    let outcomes: Vec<_> = report.outcomes().collect();
    assert!(outcomes[0].passed);
    assert!(!outcomes[1].passed);
    assert_eq!(
        outcomes[1].detail,
        "Invalid Yes/No fields found: [Active]"
    );
}

#[test]
fn json_records_are_validated_like_csv() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "y_1.json",
        r#"[
            {"Active": "Yes", "Name": "Bob"},
            {"Active": null, "Name": "Alice"},
            {"Active": "nope", "Name": "Eve"}
        ]"#,
    );

    let report = ValidationEngine::new().run(&[file], &catalog());

    let outcomes: Vec<_> = report.outcomes().collect();
    assert!(outcomes[0].passed);
    assert!(!outcomes[1].passed);
    assert_eq!(outcomes[1].detail, "Invalid Yes/No fields found: [Active]");
}

#[test]
fn unsupported_extension_passes_leniently() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "y_1.xlsx", "binary-ish content");

    let report = ValidationEngine::new().run(&[file], &catalog());

    assert_eq!(report.len(), 2);
    assert!(report.passed());
    for outcome in report.outcomes() {
        assert_eq!(outcome.detail, "Skipped: unsupported file format");
    }
}

#[test]
fn malformed_csv_fails_every_rule_with_detail() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "y_1.csv", "A,B\n1,2,3,4\n");

    let report = ValidationEngine::new().run(&[file], &catalog());

    assert_eq!(report.len(), 2);
    assert!(!report.passed());
    for outcome in report.outcomes() {
        assert!(!outcome.passed);
        assert!(outcome.detail.starts_with("Error processing file:"));
    }
}

#[test]
fn files_are_processed_in_input_order() {
    let dir = TempDir::new().unwrap();
    let second = write_file(&dir, "y_2.csv", "Active\nYes\n");
    let first = write_file(&dir, "y_1.csv", "Active\nNo\n");

    let report = ValidationEngine::new().run(&[first, second], &catalog());

    let files: Vec<&str> = report.outcomes().map(|o| o.file.as_str()).collect();
    assert_eq!(files, vec!["y_1.csv", "y_1.csv", "y_2.csv", "y_2.csv"]);
}
