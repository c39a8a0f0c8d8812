//! Row Filter for Active Fleet Vehicles

use crate::record::{CleanRecord, FleetRecord, VehicleType};
use tracing::debug;

/// Whether an active-status cell means "active"
///
/// Case-insensitive, without trimming; a missing cell is inactive.
pub fn is_active(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.to_lowercase() == "true")
}

/// Keeps active records of the allowed vehicle types
#[derive(Debug, Clone)]
pub struct RowFilter {
    allowed: Vec<VehicleType>,
}

impl RowFilter {
    /// Create a filter over a set of allowed vehicle types
    pub fn new(allowed: impl IntoIterator<Item = VehicleType>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Vehicle type of the record if it should be kept
    pub fn accepts(&self, record: &CleanRecord) -> Option<VehicleType> {
        let vehicle = VehicleType::from_normalized(record.vehicle_type())?;
        if !self.allowed.contains(&vehicle) || !is_active(record.active_status()) {
            return None;
        }
        Some(vehicle)
    }

    /// Keep the accepted records, in input order
    pub fn retain(&self, records: Vec<CleanRecord>) -> Vec<FleetRecord> {
        let total = records.len();
        let kept: Vec<FleetRecord> = records
            .into_iter()
            .filter_map(|record| {
                let vehicle = self.accepts(&record)?;
                Some(FleetRecord { record, vehicle })
            })
            .collect();

        debug!("Row filter kept {} of {} records", kept.len(), total);
        kept
    }
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new(VehicleType::ALL)
    }
}
