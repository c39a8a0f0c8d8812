//! Vehicle × Version Cross-Tab

use record_cleaner::{FleetRecord, VehicleType};
use serde::{Serialize, Serializer};
use tracing::debug;

/// Versions tracked by the cross-tab, in display order
pub const KNOWN_VERSIONS: [&str; 3] = ["0", "2.0.8", "2.0.9"];

/// Index of a version in [`KNOWN_VERSIONS`]
pub fn known_version_index(version: &str) -> Option<usize> {
    KNOWN_VERSIONS.iter().position(|v| *v == version)
}

/// One vehicle row of the cross-tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTabRow {
    pub vehicle: VehicleType,
    /// (version, count) in [`KNOWN_VERSIONS`] order; serialized as a map
    #[serde(serialize_with = "ordered_map")]
    pub counts: Vec<(String, usize)>,
    pub total: usize,
}

fn ordered_map<S: Serializer>(counts: &[(String, usize)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(version, count)| (version, count)))
}

/// Counts per (vehicle type, known version)
///
/// Every cell exists and starts at zero. Records whose version is not in
/// [`KNOWN_VERSIONS`] are not counted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleVersionTable {
    cells: [[usize; KNOWN_VERSIONS.len()]; VehicleType::ALL.len()],
}

impl VehicleVersionTable {
    /// Build from filtered records
    pub fn from_records(records: &[FleetRecord]) -> Self {
        let mut table = Self::default();
        let mut skipped = 0;
        for record in records {
            match known_version_index(record.version()) {
                Some(col) => table.cells[record.vehicle.index()][col] += 1,
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("{} records with untracked versions left out of cross-tab", skipped);
        }
        table
    }

    /// Count for a cell; `None` for an untracked version
    pub fn get(&self, vehicle: VehicleType, version: &str) -> Option<usize> {
        known_version_index(version).map(|col| self.cells[vehicle.index()][col])
    }

    /// Counts of one vehicle, in [`KNOWN_VERSIONS`] order
    pub fn row(&self, vehicle: VehicleType) -> [usize; KNOWN_VERSIONS.len()] {
        self.cells[vehicle.index()]
    }

    /// Total of one vehicle across known versions
    pub fn vehicle_total(&self, vehicle: VehicleType) -> usize {
        self.row(vehicle).iter().sum()
    }

    /// Sum of all cells
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Rows in [`VehicleType::ALL`] order
    pub fn rows(&self) -> Vec<CrossTabRow> {
        VehicleType::ALL
            .iter()
            .map(|&vehicle| {
                let counts = KNOWN_VERSIONS
                    .iter()
                    .zip(self.row(vehicle))
                    .map(|(v, c)| (v.to_string(), c))
                    .collect();
                CrossTabRow {
                    vehicle,
                    counts,
                    total: self.vehicle_total(vehicle),
                }
            })
            .collect()
    }
}
