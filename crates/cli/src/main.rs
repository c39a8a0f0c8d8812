//! Fleet Version Report - Main Entry Point

mod cli;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::{run_interactive, run_process, ProcessOptions};
use config::ReportConfig;
use logging::init_logging;
use tracing::{info, Level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ReportConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let level = if cli.verbose { Level::DEBUG } else { config.max_level() };
    init_logging(level, config.log_format).context("installing log subscriber")?;

    info!("=== Fleet Version Report v{} ===", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Process {
            csv,
            output_dir,
            format,
            skip_csv,
            skip_charts,
        } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            let options = ProcessOptions {
                format,
                skip_csv,
                skip_charts,
            };
            run_process(&config, csv.as_deref(), &options, &mut std::io::stdout().lock())
        }
        Commands::Interactive { output_dir } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            run_interactive(&config, std::io::stdin().lock(), &mut std::io::stdout().lock())
        }
    }
}
