//! Cleaning Error Types

use thiserror::Error;

/// Errors that abort a whole batch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanError {
    /// The batch contained no records
    #[error("Batch contains no records")]
    EmptyBatch,

    /// Neither vehicle-type spelling is present in the batch header
    #[error("Missing vehicle type column (looked for {})", .tried.join(", "))]
    MissingColumn { tried: Vec<&'static str> },

    /// Every record was dropped by the row filter
    #[error("No records survived filtering ({dropped} dropped)")]
    NoSurvivors { dropped: usize },
}

/// Why a single row was rejected during ingestion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Row has more cells than the header
    #[error("Row {row} has {cells} cells but the header has {columns}")]
    TooManyCells {
        row: u64,
        cells: usize,
        columns: usize,
    },

    /// Row could not be decoded
    #[error("Row {row} could not be decoded: {reason}")]
    Undecodable { row: u64, reason: String },
}

/// Errors while reading a CSV source
#[derive(Debug, Error)]
pub enum IngestError {
    /// File could not be opened or read
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Header row could not be parsed
    #[error("Failed to parse CSV header: {0}")]
    Header(#[source] csv::Error),
}
