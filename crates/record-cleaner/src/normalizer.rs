//! Field Normalization

use crate::record::{CleanRecord, RawRecord, VehicleColumn, CURRENT_VERSION_COLUMN};

/// Version assigned when a record has none
pub const DEFAULT_VERSION: &str = "0";

/// Canonical vehicle type: trimmed and lower-case
pub fn normalize_vehicle_type(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_lowercase()
}

/// Canonical version: trimmed, case preserved, [`DEFAULT_VERSION`] when blank
pub fn normalize_version(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_VERSION.to_string(),
    }
}

/// Normalizes the vehicle-type and version cells of a batch
///
/// The vehicle column is resolved once per batch, so the normalizer is
/// built per batch as well.
#[derive(Debug, Clone, Copy)]
pub struct FieldNormalizer {
    vehicle_column: VehicleColumn,
}

impl FieldNormalizer {
    /// Create a normalizer for a resolved vehicle column
    pub fn new(vehicle_column: VehicleColumn) -> Self {
        Self { vehicle_column }
    }

    /// Normalize one record
    ///
    /// A missing vehicle cell becomes an empty string; a missing version is
    /// appended as `current_version = "0"`.
    pub fn normalize(&self, mut record: RawRecord) -> CleanRecord {
        let column = self.vehicle_column.as_str();
        let vehicle = normalize_vehicle_type(record.get(column));
        record.set(column, vehicle);

        let version = normalize_version(record.get(CURRENT_VERSION_COLUMN));
        record.set(CURRENT_VERSION_COLUMN, version);

        CleanRecord::new(record, self.vehicle_column)
    }
}
