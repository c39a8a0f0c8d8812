//! Fleet Record Cleaning
//!
//! Reads fleet-vehicle CSV exports, strips sensitive columns, normalizes the
//! vehicle-type and version cells, and keeps active ambulances, cranes and
//! patrol vehicles.

mod error;
mod filter;
mod ingest;
mod normalizer;
mod pipeline;
mod record;
mod resolver;
mod sanitizer;
mod schema;

pub use error::{CleanError, IngestError, RowError};
pub use filter::{is_active, RowFilter};
pub use ingest::{read_csv, read_csv_file, IngestedBatch};
pub use normalizer::{normalize_vehicle_type, normalize_version, FieldNormalizer, DEFAULT_VERSION};
pub use pipeline::{CleanedBatch, CleaningPipeline};
pub use record::{
    CleanRecord, FleetRecord, RawRecord, VehicleColumn, VehicleType, ACTIVE_STATUS_COLUMN,
    CURRENT_VERSION_COLUMN,
};
pub use resolver::resolve_vehicle_column;
pub use sanitizer::{Sanitizer, DENYLIST};
pub use schema::RecordSchema;
