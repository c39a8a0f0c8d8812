//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Summary output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fleet-report")]
#[command(version)]
#[command(about = "Clean fleet vehicle CSV exports and chart software versions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./fleet-report.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one CSV file, print the summary and write the exports
    Process {
        /// Fleet CSV file
        csv: Option<PathBuf>,

        /// Directory for exports (overrides config)
        #[arg(long, short = 'o')]
        output_dir: Option<PathBuf>,

        /// Summary format
        #[arg(long, short = 'f', value_enum, default_value_t)]
        format: OutputFormat,

        /// Do not write the cleaned CSV
        #[arg(long)]
        skip_csv: bool,

        /// Do not write chart images
        #[arg(long)]
        skip_charts: bool,
    },

    /// Prompt for load / summary / export commands on one session
    Interactive {
        /// Directory for exports (overrides config)
        #[arg(long, short = 'o')]
        output_dir: Option<PathBuf>,
    },
}
