//! User-facing session errors

use chart_render::RenderError;
use record_cleaner::{CleanError, IngestError};
use report_export::ExportError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user; none of them end the session
#[derive(Debug, Error)]
pub enum SessionError {
    /// No input file was given
    #[error("Please select a CSV file")]
    NoFileSelected,

    /// The parser produced no rows
    #[error("The CSV file is empty or could not be parsed")]
    EmptyOrInvalidInput,

    /// Neither `vehicle_type` nor `vehicale_type` is present
    #[error("Vehicle type column not found")]
    MissingColumn,

    /// Every row was filtered out
    #[error("No active ambulance, crane or patrol vehicle rows found")]
    EmptyResultSet,

    /// Chart export requested before any successful run
    #[error("Chart not generated")]
    ExportWithoutChart,

    /// CSV export requested before any successful run
    #[error("No data to download")]
    NoDataToExport,

    /// Another request holds the session
    #[error("Another file is still being processed")]
    Busy,

    /// Input file could not be opened or read
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Chart rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl From<CleanError> for SessionError {
    fn from(err: CleanError) -> Self {
        match err {
            CleanError::EmptyBatch => SessionError::EmptyOrInvalidInput,
            CleanError::MissingColumn { .. } => SessionError::MissingColumn,
            CleanError::NoSurvivors { .. } => SessionError::EmptyResultSet,
        }
    }
}

impl SessionError {
    /// Map an ingestion failure for a given source path
    pub(crate) fn from_ingest(path: Option<PathBuf>, err: IngestError) -> Self {
        match err {
            IngestError::Io(source) => SessionError::Read {
                path: path.unwrap_or_default(),
                source,
            },
            IngestError::Header(_) => SessionError::EmptyOrInvalidInput,
        }
    }
}
