//! Report Export
//!
//! Writes the cleaned record set as CSV and rendered charts as PNG.

mod csv_export;
mod png;

pub use csv_export::{export_columns, write_records_csv, write_records_csv_file};
pub use png::{encode_png, write_png_file};

use thiserror::Error;

/// Default file name of the cleaned CSV
pub const CLEANED_CSV_FILE: &str = "cleaned_data.csv";

/// Default file name of the version pie chart
pub const PIE_CHART_FILE: &str = "current_version_pie_chart.png";

/// Default file name of the vehicle × version bar chart
pub const BAR_CHART_FILE: &str = "vehicle_version_bar_chart.png";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
