mod commands;
mod output;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datacheck")]
#[command(version, about = "Data file validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate delivered data files against a requirements catalog
    Validate {
        /// Path to the requirements catalog (CSV)
        requirements: String,

        /// Directory holding the delivered data files
        files_dir: String,

        /// Only validate files whose name starts with this prefix
        #[arg(short, long, default_value = "y_")]
        prefix: String,

        /// Path of the HTML report (defaults to evidence/validation_report.html
        /// inside the files directory)
        #[arg(short, long)]
        report: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Inspect a requirements catalog without validating any data
    Check {
        /// Path to the requirements catalog (CSV)
        requirements: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            requirements,
            files_dir,
            prefix,
            report,
            format,
        } => commands::validate::execute(
            &requirements,
            &files_dir,
            &prefix,
            report.as_deref(),
            &format,
        ),

        Commands::Check { requirements } => commands::check::execute(&requirements),
    }
}
