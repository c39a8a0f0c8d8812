//! Command implementations

use crate::cli::OutputFormat;
use crate::config::ReportConfig;
use crate::output::print_summary;
use anyhow::{Context, Result};
use session::{ChartKind, ChartRenderer, ReportSession, SessionError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Options for the one-shot `process` command
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    pub format: OutputFormat,
    pub skip_csv: bool,
    pub skip_charts: bool,
}

/// Process one CSV file and write its exports
pub fn run_process<W: Write>(
    config: &ReportConfig,
    csv: Option<&Path>,
    options: &ProcessOptions,
    out: &mut W,
) -> Result<()> {
    let mut session = ReportSession::new(ChartRenderer::new(config.chart.clone()));
    let summary = session.process_file(csv)?.summary();
    print_summary(&summary, options.format, out)?;

    if options.skip_csv && options.skip_charts {
        return Ok(());
    }
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;

    if !options.skip_csv {
        let path = config.csv_path();
        session.export_csv(&path)?;
        report_written(out, options.format, &path)?;
    }
    if !options.skip_charts {
        for (kind, path) in [
            (ChartKind::Pie, config.pie_chart_path()),
            (ChartKind::StackedBar, config.bar_chart_path()),
        ] {
            session.export_chart(kind, &path)?;
            report_written(out, options.format, &path)?;
        }
    }
    Ok(())
}

fn report_written<W: Write>(out: &mut W, format: OutputFormat, path: &Path) -> std::io::Result<()> {
    // JSON output stays a single document
    if format == OutputFormat::Table {
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Load(Option<PathBuf>),
    Summary,
    ExportCsv(Option<PathBuf>),
    ExportChart(ChartKind, Option<PathBuf>),
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  load [PATH]                    process a CSV file
  summary                        show the last processed batch
  export-csv [PATH]              write the cleaned rows
  export-chart pie|bar [PATH]    write a chart image
  help                           show this help
  quit                           leave";

fn optional_path(rest: &str) -> Option<PathBuf> {
    let rest = rest.trim();
    (!rest.is_empty()).then(|| PathBuf::from(rest))
}

impl ReplCommand {
    /// Parse a line; `Ok(None)` for blank input
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let command = match word {
            "load" => ReplCommand::Load(optional_path(rest)),
            "summary" => ReplCommand::Summary,
            "export-csv" => ReplCommand::ExportCsv(optional_path(rest)),
            "export-chart" => {
                let rest = rest.trim();
                let (kind, path) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let kind = match kind {
                    "pie" => ChartKind::Pie,
                    "bar" => ChartKind::StackedBar,
                    other => return Err(format!("Unknown chart '{}', expected pie or bar", other)),
                };
                ReplCommand::ExportChart(kind, optional_path(path))
            }
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            other => return Err(format!("Unknown command '{}', try help", other)),
        };
        Ok(Some(command))
    }
}

/// Read commands until `quit` or end of input
///
/// Session errors are printed and the prompt continues.
pub fn run_interactive<R: BufRead, W: Write>(
    config: &ReportConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = ReportSession::new(ChartRenderer::new(config.chart.clone()));
    info!("Interactive session started");
    writeln!(out, "{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(out, "fleet-report> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        let command = match ReplCommand::parse(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        if command == ReplCommand::Quit {
            break;
        }

        if let Err(err) = execute(&mut session, config, command, out) {
            match err.downcast_ref::<SessionError>() {
                Some(session_err) => writeln!(out, "{}", session_err)?,
                None => {
                    warn!("Command failed: {:#}", err);
                    writeln!(out, "Error: {:#}", err)?;
                }
            }
        }
    }

    info!("Interactive session ended");
    Ok(())
}

fn execute<W: Write>(
    session: &mut ReportSession,
    config: &ReportConfig,
    command: ReplCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        ReplCommand::Load(path) => {
            let batch = session.process_file(path.as_deref())?;
            writeln!(
                out,
                "Loaded {} rows ({} dropped, {} malformed)",
                batch.records.len(),
                batch.dropped,
                batch.rejected_rows
            )?;
        }
        ReplCommand::Summary => match session.last_batch() {
            Some(batch) => print_summary(&batch.summary(), OutputFormat::Table, out)?,
            None => writeln!(out, "Nothing processed yet")?,
        },
        ReplCommand::ExportCsv(path) => {
            let path = path.unwrap_or_else(|| config.csv_path());
            session.export_csv(&path)?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        ReplCommand::ExportChart(kind, path) => {
            let path = path.unwrap_or_else(|| match kind {
                ChartKind::Pie => config.pie_chart_path(),
                ChartKind::StackedBar => config.bar_chart_path(),
            });
            session.export_chart(kind, &path)?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        ReplCommand::Help => writeln!(out, "{}", HELP)?,
        ReplCommand::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLEET_CSV: &str = "vehicle_type,intouch_active_status,current_version,city\n\
                             Ambulance ,TRUE,2.0.8,Pune\n\
                             bus,true,1,Pune\n\
                             crane,false,2.0.9,Nashik\n";

    fn config_in(dir: &Path) -> ReportConfig {
        ReportConfig {
            output_dir: dir.join("out"),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("  "), Ok(None));
        assert_eq!(ReplCommand::parse("load"), Ok(Some(ReplCommand::Load(None))));
        assert_eq!(
            ReplCommand::parse("load my fleet.csv"),
            Ok(Some(ReplCommand::Load(Some(PathBuf::from("my fleet.csv")))))
        );
        assert_eq!(
            ReplCommand::parse("export-chart bar out.png"),
            Ok(Some(ReplCommand::ExportChart(
                ChartKind::StackedBar,
                Some(PathBuf::from("out.png"))
            )))
        );
        assert_eq!(
            ReplCommand::parse("export-chart pie"),
            Ok(Some(ReplCommand::ExportChart(ChartKind::Pie, None)))
        );
        assert!(ReplCommand::parse("export-chart donut").is_err());
        assert!(ReplCommand::parse("frobnicate").is_err());
        assert_eq!(ReplCommand::parse("exit"), Ok(Some(ReplCommand::Quit)));
    }

    #[test]
    fn test_process_writes_exports() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("fleet.csv");
        std::fs::write(&csv, FLEET_CSV).unwrap();
        let config = config_in(dir.path());

        let mut out = Vec::new();
        run_process(&config, Some(&csv), &ProcessOptions::default(), &mut out).unwrap();

        let cleaned = std::fs::read_to_string(config.csv_path()).unwrap();
        assert_eq!(
            cleaned,
            "vehicle_type,intouch_active_status,current_version\nambulance,TRUE,2.0.8\n"
        );
        assert!(config.pie_chart_path().exists());
        assert!(config.bar_chart_path().exists());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Kept rows:       1 (2 dropped, 0 malformed)"));
    }

    #[test]
    fn test_process_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = run_process(&config_in(dir.path()), None, &ProcessOptions::default(), &mut out)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::NoFileSelected)
        ));
        assert!(!config_in(dir.path()).output_dir.exists());
    }

    #[test]
    fn test_interactive_session() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("fleet.csv");
        std::fs::write(&csv, FLEET_CSV).unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir_all(&config.output_dir).unwrap();

        let script = format!(
            "export-chart pie\nexport-csv\nload\nsummary\nload {}\nexport-csv\nexport-chart bar\nquit\nload never-read.csv\n",
            csv.display()
        );
        let mut out = Vec::new();
        run_interactive(&config, script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Chart not generated"));
        assert!(text.contains("No data to download"));
        assert!(text.contains("Please select a CSV file"));
        assert!(text.contains("Nothing processed yet"));
        assert!(text.contains("Loaded 1 rows (2 dropped, 0 malformed)"));
        assert!(config.csv_path().exists());
        assert!(config.bar_chart_path().exists());
        assert!(!config.pie_chart_path().exists());
    }

    #[test]
    fn test_interactive_recovers_from_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing_column = dir.path().join("bad.csv");
        std::fs::write(&missing_column, "type,intouch_active_status\ncrane,true\n").unwrap();

        let script = format!("load {}\nsummary\n", missing_column.display());
        let mut out = Vec::new();
        run_interactive(&config_in(dir.path()), script.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Vehicle type column not found"));
        assert!(text.contains("Nothing processed yet"));
    }
}
