//! release-guard CLI tool.
//!
//! Usage:
//! ```bash
//! release-guard check [OPTIONS] [PATH]
//! release-guard list-guidelines
//! release-guard init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Release-guideline compliance checker for project repositories
#[derive(Parser)]
#[command(name = "release-guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guideline checks against a directory
    Check {
        /// Path to check (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only run specific guidelines (comma-separated rule ids)
        #[arg(long)]
        only: Option<String>,
    },

    /// List the built-in guidelines
    ListGuidelines,

    /// Write template configuration and metadata files
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check { path, only } => {
            commands::check::run(&path, only.as_deref(), cli.config.as_deref(), cli.no_color)
        }
        Commands::ListGuidelines => {
            commands::list_guidelines::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
