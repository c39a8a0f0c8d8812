//! Report Session

use crate::SessionError;
use chart_render::{ChartImages, ChartKind, ChartRenderer};
use fleet_stats::{ReportSummary, VersionReport};
use record_cleaner::{read_csv, read_csv_file, CleaningPipeline, FleetRecord, IngestedBatch, VehicleColumn};
use report_export::{write_png_file, write_records_csv, write_records_csv_file};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Everything derived from one successful run
#[derive(Debug, Clone)]
pub struct ProcessedBatch {
    /// Where the rows came from, if read from a file
    pub source: Option<PathBuf>,
    /// Cleaned and filtered records
    pub records: Vec<FleetRecord>,
    /// Vehicle column the batch used
    pub vehicle_column: VehicleColumn,
    /// Rows dropped by the filter
    pub dropped: usize,
    /// Malformed rows skipped during ingestion
    pub rejected_rows: usize,
    /// Histogram and cross-tab
    pub report: VersionReport,
    /// Rendered charts
    pub charts: ChartImages,
}

impl ProcessedBatch {
    /// Printable summary
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            source: self.source.as_ref().map(|p| p.display().to_string()),
            vehicle_column: self.vehicle_column.as_str(),
            kept: self.records.len(),
            dropped: self.dropped,
            rejected_rows: self.rejected_rows,
            report: self.report.summary(),
        }
    }
}

/// Owned summary of a processed batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub source: Option<String>,
    pub vehicle_column: &'static str,
    pub kept: usize,
    pub dropped: usize,
    pub rejected_rows: usize,
    pub report: ReportSummary,
}

/// Holds the batch of the latest run and serves exports from it
///
/// Every run that receives input discards the previous batch. A successful
/// run stores a new one; a failed run leaves the session without data.
#[derive(Debug, Default)]
pub struct ReportSession {
    pipeline: CleaningPipeline,
    renderer: ChartRenderer,
    current: Option<ProcessedBatch>,
}

impl ReportSession {
    /// Create a session with a chart renderer
    pub fn new(renderer: ChartRenderer) -> Self {
        Self {
            pipeline: CleaningPipeline::default(),
            renderer,
            current: None,
        }
    }

    /// Read and process a CSV file
    ///
    /// Without a path nothing changes; otherwise the current batch is dropped
    /// first, so a failed read or clean leaves the session empty.
    pub fn process_file(&mut self, path: Option<&Path>) -> Result<&ProcessedBatch, SessionError> {
        let path = path.ok_or(SessionError::NoFileSelected).map_err(log_failure)?;
        self.clear();
        let batch = read_csv_file(path)
            .map_err(|e| SessionError::from_ingest(Some(path.to_path_buf()), e))
            .map_err(log_failure)?;
        self.process_batch(batch, Some(path.to_path_buf()))
    }

    /// Read and process CSV data from a reader
    pub fn process_reader<R: Read>(&mut self, reader: R) -> Result<&ProcessedBatch, SessionError> {
        self.clear();
        let batch = read_csv(reader)
            .map_err(|e| SessionError::from_ingest(None, e))
            .map_err(log_failure)?;
        self.process_batch(batch, None)
    }

    /// Clean, aggregate and render an ingested batch
    ///
    /// Replaces the current batch on success and leaves none on failure.
    pub fn process_batch(
        &mut self,
        batch: IngestedBatch,
        source: Option<PathBuf>,
    ) -> Result<&ProcessedBatch, SessionError> {
        self.clear();
        let rejected_rows = batch.rejected.len();
        let processed = self.build(batch, source).map_err(log_failure)?;
        info!(
            "Processed batch: {} kept, {} dropped, {} malformed",
            processed.records.len(),
            processed.dropped,
            rejected_rows
        );
        Ok(self.current.insert(processed))
    }

    fn build(&self, batch: IngestedBatch, source: Option<PathBuf>) -> Result<ProcessedBatch, SessionError> {
        if batch.is_empty() {
            return Err(SessionError::EmptyOrInvalidInput);
        }
        let rejected_rows = batch.rejected.len();
        let cleaned = self.pipeline.run_batch(batch)?;
        let report = VersionReport::compute(&cleaned.records);
        let charts = self.renderer.render(&report)?;

        Ok(ProcessedBatch {
            source,
            records: cleaned.records,
            vehicle_column: cleaned.vehicle_column,
            dropped: cleaned.dropped,
            rejected_rows,
            report,
            charts,
        })
    }

    /// Last successful batch
    pub fn last_batch(&self) -> Option<&ProcessedBatch> {
        self.current.as_ref()
    }

    /// Cleaned records of the last successful batch (empty before any)
    pub fn cleaned_records(&self) -> &[FleetRecord] {
        self.current.as_ref().map(|b| b.records.as_slice()).unwrap_or(&[])
    }

    /// Aggregates of the last successful batch
    pub fn report(&self) -> Option<&VersionReport> {
        self.current.as_ref().map(|b| &b.report)
    }

    /// Charts of the last successful batch
    pub fn charts(&self) -> Option<&ChartImages> {
        self.current.as_ref().map(|b| &b.charts)
    }

    /// Write the cleaned records as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SessionError> {
        let batch = self.current.as_ref().ok_or(SessionError::NoDataToExport)?;
        write_records_csv(&batch.records, writer)?;
        Ok(())
    }

    /// Export the cleaned records to a CSV file
    pub fn export_csv(&self, path: &Path) -> Result<(), SessionError> {
        let batch = self
            .current
            .as_ref()
            .ok_or(SessionError::NoDataToExport)
            .map_err(log_failure)?;
        write_records_csv_file(&batch.records, path)?;
        Ok(())
    }

    /// Export one chart to a PNG file
    pub fn export_chart(&self, kind: ChartKind, path: &Path) -> Result<(), SessionError> {
        let charts = self
            .charts()
            .ok_or(SessionError::ExportWithoutChart)
            .map_err(log_failure)?;
        write_png_file(charts.get(kind), path)?;
        Ok(())
    }

    /// Drop the current batch
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            debug!("Discarded previous batch");
        }
    }
}

fn log_failure(err: SessionError) -> SessionError {
    warn!("{}", err);
    err
}
