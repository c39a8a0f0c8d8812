//! CSV Ingestion

use crate::error::{IngestError, RowError};
use crate::record::RawRecord;
use crate::schema::RecordSchema;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Rows read from one CSV source
#[derive(Debug, Clone, Default)]
pub struct IngestedBatch {
    /// Header columns in file order
    pub columns: Vec<String>,
    /// Well-formed rows
    pub records: Vec<RawRecord>,
    /// Rows rejected by schema validation
    pub rejected: Vec<RowError>,
}

impl IngestedBatch {
    /// Whether no well-formed rows were read
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read a CSV file with a header row
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<IngestedBatch, IngestError> {
    let path = path.as_ref();
    info!("Reading CSV file {}", path.display());
    let file = File::open(path)?;
    read_csv(file)
}

/// Read CSV data with a header row from any reader
pub fn read_csv<R: Read>(source: R) -> Result<IngestedBatch, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers().map_err(IngestError::Header)?.clone();
    let schema = RecordSchema::new(headers.iter());

    let mut batch = IngestedBatch {
        columns: schema.columns().to_vec(),
        ..Default::default()
    };

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(IngestError::Io(err.into())),
            Err(err) => {
                let row = err.position().map(|p| p.line()).unwrap_or(0);
                let rejected = RowError::Undecodable {
                    row,
                    reason: err.to_string(),
                };
                warn!("Skipping row: {}", rejected);
                batch.rejected.push(rejected);
                continue;
            }
        };

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cells: Vec<&str> = row.iter().collect();
        match schema.validate(line, &cells) {
            Ok(record) => batch.records.push(record),
            Err(rejected) => {
                warn!("Skipping row: {}", rejected);
                batch.rejected.push(rejected);
            }
        }
    }

    debug!(
        "Ingested {} rows ({} rejected) over {} columns",
        batch.records.len(),
        batch.rejected.len(),
        batch.columns.len()
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic_csv() {
        let data = "vehicle_type,intouch_active_status,current_version\n\
                    Ambulance ,TRUE,2.0.8\n\
                    crane,false,2.0.9\n";
        let batch = read_csv(data.as_bytes()).unwrap();

        assert_eq!(batch.columns.len(), 3);
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0].get("vehicle_type"), Some("Ambulance "));
        assert!(batch.rejected.is_empty());
    }

    #[test]
    fn test_skips_blank_lines() {
        let data = "vehicle_type,intouch_active_status\n\ncrane,true\n\n";
        let batch = read_csv(data.as_bytes()).unwrap();
        assert_eq!(batch.records.len(), 1);
    }

    #[test]
    fn test_rejects_overlong_rows() {
        let data = "vehicle_type,intouch_active_status\ncrane,true,extra\ncrane,true\n";
        let batch = read_csv(data.as_bytes()).unwrap();

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.rejected.len(), 1);
        assert!(matches!(
            batch.rejected[0],
            RowError::TooManyCells { row: 2, cells: 3, columns: 2 }
        ));
    }

    #[test]
    fn test_rejects_invalid_utf8_row() {
        let mut data = b"vehicle_type,intouch_active_status\n".to_vec();
        data.extend_from_slice(b"cr\xffane,true\n");
        data.extend_from_slice(b"crane,true\n");
        let batch = read_csv(data.as_slice()).unwrap();

        assert_eq!(batch.records.len(), 1);
        assert!(matches!(batch.rejected[0], RowError::Undecodable { .. }));
    }

    #[test]
    fn test_empty_input() {
        let batch = read_csv("".as_bytes()).unwrap();
        assert!(batch.is_empty());
        assert!(batch.columns.is_empty());

        let header_only = read_csv("vehicle_type,intouch_active_status\n".as_bytes()).unwrap();
        assert!(header_only.is_empty());
        assert_eq!(header_only.columns.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv_file("/nonexistent/fleet.csv").unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
