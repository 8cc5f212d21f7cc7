use colored::*;
use datacheck_core::ValidationReport;
use serde_json::json;

pub fn print_validation_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    for outcome in report.outcomes() {
        let status = if outcome.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "\n  [{}] {} — {}",
            status, outcome.rule_name, outcome.file
        );
        println!("        {}", outcome.detail);
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total checks: {}", report.len());
    println!("  Failures:     {}", report.failures().len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) {
    let output = json!({
        "passed": report.passed(),
        "outcomes": report.outcomes().collect::<Vec<_>>(),
        "summary": {
            "check_count": report.len(),
            "failure_count": report.failures().len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
