//! Chart configuration

use serde::{Deserialize, Serialize};

/// Chart canvas configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width (pixels)
    pub width: u32,

    /// Image height (pixels)
    pub height: u32,

    /// Blank border around the plot (pixels)
    pub margin: u32,

    /// Background color (RGB)
    pub background: [u8; 3],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 24,
            background: [255, 255, 255],
        }
    }
}
