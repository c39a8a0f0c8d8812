//! Fleet Version Charts
//!
//! Renders the version histogram as a pie chart and the vehicle × version
//! cross-tab as a stacked bar chart, labelled with the embedded DejaVu Sans
//! font. Each render produces fresh images; nothing is drawn incrementally.

mod bar;
mod config;
mod palette;
mod pie;
mod text;

pub use bar::{render_stacked_bar, BarLayout};
pub use config::ChartConfig;
pub use palette::{series_color, AXIS, LABEL_ON_FILL, PALETTE};
pub use pie::{render_pie, PieLayout};

use fleet_stats::VersionReport;
use image::RgbImage;
use thiserror::Error;
use tracing::debug;

/// Rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Canvas {width}x{height} is too small for the chart")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("Label font could not be loaded: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

/// Chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Version distribution
    Pie,
    /// Vehicle type × version
    StackedBar,
}

/// Rendered charts of one batch
#[derive(Debug, Clone)]
pub struct ChartImages {
    pub pie: RgbImage,
    pub bar: RgbImage,
}

impl ChartImages {
    /// Image for a chart kind
    pub fn get(&self, kind: ChartKind) -> &RgbImage {
        match kind {
            ChartKind::Pie => &self.pie,
            ChartKind::StackedBar => &self.bar,
        }
    }
}

/// Renders both charts with one configuration
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    /// Create a renderer
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Canvas configuration
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render both charts for a report
    pub fn render(&self, report: &VersionReport) -> Result<ChartImages, RenderError> {
        let pie = render_pie(&report.histogram, &self.config)?;
        let bar = render_stacked_bar(&report.crosstab, &self.config)?;
        debug!(
            "Rendered charts at {}x{}",
            self.config.width, self.config.height
        );
        Ok(ChartImages { pie, bar })
    }
}
