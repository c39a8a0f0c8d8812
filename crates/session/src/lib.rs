//! Fleet Report Session
//!
//! Ties ingestion, cleaning, statistics and rendering together and keeps the
//! last successful result for export.

mod error;
mod session;
mod shared;

pub use error::SessionError;
pub use session::{BatchSummary, ProcessedBatch, ReportSession};
pub use shared::SharedSession;

pub use chart_render::{ChartConfig, ChartKind, ChartRenderer};
pub use report_export::{BAR_CHART_FILE, CLEANED_CSV_FILE, PIE_CHART_FILE};
