//! Logging setup

use crate::config::LogFormat;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber; log lines go to stderr so stdout stays
/// clean for reports
pub fn init_logging(level: Level, format: LogFormat) -> Result<(), SetGlobalDefaultError> {
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    }
}
