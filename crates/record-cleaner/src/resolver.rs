//! Vehicle Column Resolution

use crate::error::CleanError;
use crate::record::VehicleColumn;
use tracing::{debug, warn};

/// Pick the vehicle-type column from a batch header
///
/// All rows of a batch share one header, so this runs once per batch. Short
/// rows do not affect the outcome.
pub fn resolve_vehicle_column<'a, I>(header: I) -> Result<VehicleColumn, CleanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let header: Vec<&str> = header.into_iter().collect();
    for candidate in VehicleColumn::CANDIDATES {
        if header.contains(&candidate.as_str()) {
            debug!("Vehicle type column resolved to {}", candidate);
            return Ok(candidate);
        }
    }

    warn!("No vehicle type column in header");
    Err(CleanError::MissingColumn {
        tried: VehicleColumn::CANDIDATES.iter().map(|c| c.as_str()).collect(),
    })
}
