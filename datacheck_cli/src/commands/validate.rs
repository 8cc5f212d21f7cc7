use anyhow::{Context, Result};
use datacheck_loader::load_catalog;
use datacheck_validator::ValidationEngine;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{output, report};

pub fn execute(
    requirements_path: &str,
    files_dir: &str,
    prefix: &str,
    report_path: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Validating files in: {}", files_dir);
    info!("Requirements catalog: {}", requirements_path);

    // Catalog load failure is fatal: nothing is validated without it.
    let catalog = load_catalog(Path::new(requirements_path)).with_context(|| {
        format!("Failed to load requirements catalog: {requirements_path}")
    })?;

    output::print_info(&format!(
        "Requirements catalog loaded: {} fields ({} Yes/No)",
        catalog.len(),
        catalog.fields_matching("Yes/No").len()
    ));

    let files = discover_files(Path::new(files_dir), prefix)
        .with_context(|| format!("Failed to list data files in: {files_dir}"))?;

    if files.is_empty() {
        output::print_info(&format!(
            "No files matching prefix '{prefix}' found in {files_dir}"
        ));
    }

    let engine = ValidationEngine::new();
    let validation = engine.run(&files, &catalog);

    output::print_validation_report(&validation, format);

    let report_path = report_path
        .map(PathBuf::from)
        .unwrap_or_else(|| default_report_path(Path::new(files_dir)));
    report::write_html_report(&validation, &report_path)
        .with_context(|| format!("Failed to write HTML report: {}", report_path.display()))?;
    output::print_success(&format!("HTML report written to {}", report_path.display()));

    if !validation.passed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Lists the regular files in `dir` whose name starts with `prefix`, sorted
/// by name so batches are deterministic regardless of directory order.
fn discover_files(dir: &Path, prefix: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(prefix) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn default_report_path(files_dir: &Path) -> PathBuf {
    files_dir.join("evidence").join("validation_report.html")
}
