//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for verification results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned transcript, one section per check
    Text,
    /// JSON report
    Json,
}

/// CLI arguments for seed-questions
#[derive(Parser, Debug)]
#[command(name = "seed-questions")]
#[command(author, version, about = "Seed the questionnaire catalogue into the database")]
#[command(long_about = r#"
Seeds the built-in questionnaire catalogue into the question tables.

The run has three steps:
1. Deactivate templates whose question number is no longer in the catalogue
2. Upsert every catalogue entry with its answer options and score examples
3. Print the active templates for inspection

A failing entry is reported and skipped; the remaining entries are still seeded.
Running the seeder twice leaves the database unchanged.

Configuration files are loaded from (in priority order):
1. QUESTIONNAIRE_* environment variables
2. --config <path>         Explicit config file
3. ./questionnaire.toml    Project-level config
4. ~/.config/questionnaire-admin/config.toml   Global config

Example:
  QUESTIONNAIRE_GATEWAY__CONNECTION_STRING=... seed-questions
  seed-questions --dry-run
"#)]
pub struct SeedCli {
    /// Validate and print the catalogue without contacting the database
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// CLI arguments for verify-questions
#[derive(Parser, Debug)]
#[command(name = "verify-questions")]
#[command(author, version, about = "Verify the seeded questionnaire templates")]
#[command(long_about = r#"
Runs read-only consistency checks against the question tables:

1. Active template count
2. Comment and motivation present on every active template
3. Three answer options per template
4. Three score examples per template covering low, medium and high, each with an action
5. Distribution by category and sub-category
6. Deactivated templates

Findings are listed at the end. They do not change the exit status;
only a failure to run the checks does.

Example:
  verify-questions
  verify-questions --output json
"#)]
pub struct VerifyCli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
