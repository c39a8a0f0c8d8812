//! Batch Cleaning Pipeline
//!
//! sanitize → normalize → filter, run to completion over one batch.

use crate::error::CleanError;
use crate::filter::RowFilter;
use crate::ingest::IngestedBatch;
use crate::normalizer::FieldNormalizer;
use crate::record::{FleetRecord, RawRecord, VehicleColumn};
use crate::resolver::resolve_vehicle_column;
use crate::sanitizer::Sanitizer;
use tracing::info;

/// Output of one cleaning run
#[derive(Debug, Clone)]
pub struct CleanedBatch {
    /// Records that survived the filter, in input order
    pub records: Vec<FleetRecord>,
    /// Vehicle column the batch used
    pub vehicle_column: VehicleColumn,
    /// Records dropped by the filter
    pub dropped: usize,
}

/// Sanitizer, filter and column resolution bundled for batch use
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline {
    sanitizer: Sanitizer,
    filter: RowFilter,
}

impl CleaningPipeline {
    /// Create a pipeline with explicit stages
    pub fn new(sanitizer: Sanitizer, filter: RowFilter) -> Self {
        Self { sanitizer, filter }
    }

    /// Clean an ingested batch, resolving the vehicle column from its header
    pub fn run_batch(&self, batch: IngestedBatch) -> Result<CleanedBatch, CleanError> {
        if batch.records.is_empty() {
            return Err(CleanError::EmptyBatch);
        }
        let vehicle_column = resolve_vehicle_column(batch.columns.iter().map(String::as_str))?;
        self.clean(vehicle_column, batch.records)
    }

    /// Clean in-memory records that carry no separate header
    ///
    /// The header is taken as the union of the records' columns.
    pub fn run(&self, records: Vec<RawRecord>) -> Result<CleanedBatch, CleanError> {
        if records.is_empty() {
            return Err(CleanError::EmptyBatch);
        }
        let vehicle_column = resolve_vehicle_column(records.iter().flat_map(|record| record.columns()))?;
        self.clean(vehicle_column, records)
    }

    /// Sanitize, normalize and filter
    ///
    /// Fails after filtering when nothing survived.
    fn clean(
        &self,
        vehicle_column: VehicleColumn,
        records: Vec<RawRecord>,
    ) -> Result<CleanedBatch, CleanError> {
        info!(
            "Cleaning {} records using column {}",
            records.len(),
            vehicle_column
        );
        let normalizer = FieldNormalizer::new(vehicle_column);
        let total = records.len();
        let cleaned = records
            .into_iter()
            .map(|record| normalizer.normalize(self.sanitizer.sanitize(record)))
            .collect();

        let records = self.filter.retain(cleaned);
        let dropped = total - records.len();
        if records.is_empty() {
            return Err(CleanError::NoSurvivors { dropped });
        }

        info!("{} records kept, {} dropped", records.len(), dropped);
        Ok(CleanedBatch {
            records,
            vehicle_column,
            dropped,
        })
    }
}
