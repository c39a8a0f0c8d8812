//! Cleaned CSV export

use crate::ExportError;
use record_cleaner::FleetRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Union of record columns in first-seen order
pub fn export_columns(records: &[FleetRecord]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        for column in record.record.fields().columns() {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }
    columns
}

/// Write records as CSV with a header row
///
/// Cells a record lacks are written empty.
pub fn write_records_csv<W: Write>(records: &[FleetRecord], writer: W) -> Result<(), ExportError> {
    let columns = export_columns(records);
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(&columns)?;
    for record in records {
        let fields = record.record.fields();
        out.write_record(columns.iter().map(|c| fields.get(c).unwrap_or("")))?;
    }
    out.flush()?;
    Ok(())
}

/// Write records to a CSV file, replacing it if present
pub fn write_records_csv_file<P: AsRef<Path>>(
    records: &[FleetRecord],
    path: P,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_records_csv(records, file)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
