//! Record Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column holding the software version of the in-vehicle unit
pub const CURRENT_VERSION_COLUMN: &str = "current_version";

/// Column holding the active flag
pub const ACTIVE_STATUS_COLUMN: &str = "intouch_active_status";

/// One parsed CSV row: column name to raw cell value, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the column is present (even if its cell is empty)
    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Set a cell, replacing an existing value in place or appending a new column
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Remove a column, returning its value if it was present
    pub fn remove(&mut self, column: &str) -> Option<String> {
        let idx = self.fields.iter().position(|(name, _)| name == column)?;
        Some(self.fields.remove(idx).1)
    }

    /// Keep only the columns for which the predicate holds
    pub fn retain_columns<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.fields.retain(|(name, _)| keep(name));
    }

    /// Column names in order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// (column, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

/// Which header spelling carries the vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleColumn {
    /// `vehicle_type`
    VehicleType,
    /// `vehicale_type`, a misspelling found in some exports
    Vehicale,
}

impl VehicleColumn {
    /// Candidate spellings in lookup order
    pub const CANDIDATES: [VehicleColumn; 2] = [VehicleColumn::VehicleType, VehicleColumn::Vehicale];

    /// Header name
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleColumn::VehicleType => "vehicle_type",
            VehicleColumn::Vehicale => "vehicale_type",
        }
    }
}

impl fmt::Display for VehicleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle types kept by the row filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Ambulance,
    Crane,
    #[serde(rename = "patrol vehicle")]
    PatrolVehicle,
}

impl VehicleType {
    /// All types in display order
    pub const ALL: [VehicleType; 3] = [
        VehicleType::Ambulance,
        VehicleType::Crane,
        VehicleType::PatrolVehicle,
    ];

    /// Parse an already normalized (trimmed, lower-case) value
    pub fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "ambulance" => Some(VehicleType::Ambulance),
            "crane" => Some(VehicleType::Crane),
            "patrol vehicle" => Some(VehicleType::PatrolVehicle),
            _ => None,
        }
    }

    /// Canonical normalized name
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Ambulance => "ambulance",
            VehicleType::Crane => "crane",
            VehicleType::PatrolVehicle => "patrol vehicle",
        }
    }

    /// Position in [`VehicleType::ALL`]
    pub fn index(&self) -> usize {
        match self {
            VehicleType::Ambulance => 0,
            VehicleType::Crane => 1,
            VehicleType::PatrolVehicle => 2,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record after sanitizing and normalization
///
/// The vehicle-type cell is trimmed and lower-case, `current_version` is
/// trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    record: RawRecord,
    vehicle_column: VehicleColumn,
}

impl CleanRecord {
    pub(crate) fn new(record: RawRecord, vehicle_column: VehicleColumn) -> Self {
        Self {
            record,
            vehicle_column,
        }
    }

    /// Normalized vehicle type (may be empty or outside the allowed set)
    pub fn vehicle_type(&self) -> &str {
        self.record.get(self.vehicle_column.as_str()).unwrap_or("")
    }

    /// Normalized software version
    pub fn current_version(&self) -> &str {
        self.record.get(CURRENT_VERSION_COLUMN).unwrap_or("0")
    }

    /// Raw active-status cell
    pub fn active_status(&self) -> Option<&str> {
        self.record.get(ACTIVE_STATUS_COLUMN)
    }

    /// Underlying cells
    pub fn fields(&self) -> &RawRecord {
        &self.record
    }
}

/// A clean record that passed the row filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetRecord {
    pub record: CleanRecord,
    pub vehicle: VehicleType,
}

impl FleetRecord {
    /// Normalized software version
    pub fn version(&self) -> &str {
        self.record.current_version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut record: RawRecord = [("a", "1"), ("b", "2")].into_iter().collect();
        record.set("a", "3");
        record.set("c", "4");

        let cols: Vec<_> = record.columns().collect();
        assert_eq!(cols, vec!["a", "b", "c"]);
        assert_eq!(record.get("a"), Some("3"));
    }

    #[test]
    fn test_remove_missing_column() {
        let mut record: RawRecord = [("a", "1")].into_iter().collect();
        assert_eq!(record.remove("zzz"), None);
        assert_eq!(record.remove("a"), Some("1".to_string()));
        assert!(record.is_empty());
    }

    #[test]
    fn test_vehicle_type_roundtrip() {
        for vehicle in VehicleType::ALL {
            assert_eq!(VehicleType::from_normalized(vehicle.as_str()), Some(vehicle));
            assert_eq!(VehicleType::ALL[vehicle.index()], vehicle);
        }
        assert_eq!(VehicleType::from_normalized("Ambulance"), None);
        assert_eq!(VehicleType::from_normalized("bus"), None);
    }
}
