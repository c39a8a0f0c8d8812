//! Summary printing

use crate::cli::OutputFormat;
use session::BatchSummary;
use std::io::{self, Write};

/// Print a batch summary in the requested format
pub fn print_summary<W: Write>(summary: &BatchSummary, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)
        }
        OutputFormat::Table => print_table(summary, out),
    }
}

fn print_table<W: Write>(summary: &BatchSummary, out: &mut W) -> io::Result<()> {
    if let Some(source) = &summary.source {
        writeln!(out, "Source:          {}", source)?;
    }
    writeln!(out, "Vehicle column:  {}", summary.vehicle_column)?;
    writeln!(
        out,
        "Kept rows:       {} ({} dropped, {} malformed)",
        summary.kept, summary.dropped, summary.rejected_rows
    )?;
    writeln!(out)?;

    writeln!(out, "{:<16} {:>7} {:>8}", "Version", "Count", "Share")?;
    for entry in &summary.report.histogram {
        writeln!(
            out,
            "{:<16} {:>7} {:>7.1}%",
            entry.version, entry.count, entry.percent
        )?;
    }
    writeln!(out)?;

    let Some(first) = summary.report.crosstab.first() else {
        return Ok(());
    };
    write!(out, "{:<16}", "Vehicle")?;
    for (version, _) in &first.counts {
        write!(out, " {:>7}", version)?;
    }
    writeln!(out, " {:>7}", "Total")?;

    for row in &summary.report.crosstab {
        write!(out, "{:<16}", row.vehicle.as_str())?;
        for (_, count) in &row.counts {
            write!(out, " {:>7}", count)?;
        }
        writeln!(out, " {:>7}", row.total)?;
    }
    Ok(())
}
