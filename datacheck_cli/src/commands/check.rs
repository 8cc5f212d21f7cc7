use anyhow::{Context, Result};
use datacheck_loader::load_catalog;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(requirements_path: &str) -> Result<()> {
    info!("Checking requirements catalog: {}", requirements_path);

    let catalog = load_catalog(Path::new(requirements_path)).with_context(|| {
        format!("Failed to load requirements catalog: {requirements_path}")
    })?;

    output::print_success("Requirements catalog is valid");

    let yes_no_fields = catalog.fields_matching("Yes/No");

    println!("\nCatalog Summary:");
    println!("  Fields:        {}", catalog.len());
    println!("  Yes/No fields: {}", yes_no_fields.len());

    if !yes_no_fields.is_empty() {
        println!("\nYes/No fields:");
        for field in yes_no_fields {
            println!("  - {field}");
        }
    }

    Ok(())
}
