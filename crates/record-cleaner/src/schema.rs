//! Row Schema Validation

use crate::error::RowError;
use crate::record::RawRecord;

/// Header of a CSV batch; turns positional rows into [`RawRecord`]s
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    columns: Vec<String>,
}

impl RecordSchema {
    /// Create a schema from header names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Header names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Validate one row against the header
    ///
    /// Short rows are accepted and simply lack the trailing columns. Rows
    /// with extra cells cannot be mapped and are rejected.
    pub fn validate(&self, row: u64, cells: &[&str]) -> Result<RawRecord, RowError> {
        if cells.len() > self.columns.len() {
            return Err(RowError::TooManyCells {
                row,
                cells: cells.len(),
                columns: self.columns.len(),
            });
        }

        Ok(self.columns.iter().map(String::as_str).zip(cells.iter().copied()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> RecordSchema {
        RecordSchema::new(["vehicle_type", "intouch_active_status", "current_version"])
    }

    #[test]
    fn test_full_row() {
        let record = schema().validate(2, &["crane", "true", "2.0.9"]).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("current_version"), Some("2.0.9"));
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let record = schema().validate(2, &["crane", "true"]).unwrap();
        assert!(!record.contains("current_version"));
        assert_eq!(record.get("intouch_active_status"), Some("true"));
    }

    #[test]
    fn test_long_row_rejected() {
        let err = schema().validate(7, &["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(
            err,
            RowError::TooManyCells {
                row: 7,
                cells: 4,
                columns: 3
            }
        );
    }

    #[test]
    fn test_duplicate_header_keeps_last_cell() {
        let schema = RecordSchema::new(["a", "a"]);
        let record = schema.validate(2, &["first", "second"]).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a"), Some("second"));
    }
}
