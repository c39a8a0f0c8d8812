//! Fleet Version Statistics
//!
//! Aggregates over the filtered record set. Both views are recomputed from
//! scratch for every batch.

mod crosstab;
mod histogram;

pub use crosstab::{known_version_index, CrossTabRow, VehicleVersionTable, KNOWN_VERSIONS};
pub use histogram::{HistogramEntry, VersionHistogram};

use record_cleaner::FleetRecord;
use serde::Serialize;

/// Both aggregate views of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionReport {
    pub histogram: VersionHistogram,
    pub crosstab: VehicleVersionTable,
}

impl VersionReport {
    /// Compute both views over the filtered records
    pub fn compute(records: &[FleetRecord]) -> Self {
        Self {
            histogram: VersionHistogram::from_records(records),
            crosstab: VehicleVersionTable::from_records(records),
        }
    }

    /// Serializable summary
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.histogram.total(),
            histogram: self.histogram.entries(),
            crosstab: self.crosstab.rows(),
        }
    }
}

/// Flattened report for printing or JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub histogram: Vec<HistogramEntry>,
    pub crosstab: Vec<CrossTabRow>,
}
