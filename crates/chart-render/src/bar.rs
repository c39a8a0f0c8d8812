//! Stacked bar chart of the vehicle × version cross-tab

use crate::config::ChartConfig;
use crate::palette::{series_color, AXIS};
use crate::text::{draw_label, draw_label_centered, label_font};
use crate::RenderError;
use ab_glyph::FontRef;
use fleet_stats::{VehicleVersionTable, KNOWN_VERSIONS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use record_cleaner::VehicleType;

/// Height reserved above the plot for the legend
const LEGEND_HEIGHT: u32 = 28;
/// Height reserved under the axis for vehicle names
const AXIS_LABEL_HEIGHT: u32 = 20;
const SWATCH: u32 = 14;
/// Horizontal distance between legend entries
const LEGEND_STEP: u32 = 72;
const SWATCH_TEXT_GAP: i32 = 4;

/// Bar geometry for a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// y of the horizontal axis
    pub baseline: i32,
    /// y of the tallest possible bar top
    pub top: i32,
    /// x of the vertical axis
    pub left: i32,
    /// Left edge of each bar, in [`VehicleType::ALL`] order
    pub bar_x: [i32; 3],
    pub bar_width: u32,
}

impl BarLayout {
    /// Compute the layout, or fail if the canvas is too small to hold the bars
    pub fn for_config(config: &ChartConfig) -> Result<Self, RenderError> {
        let margins = config.margin.saturating_mul(2);
        let plot_width = config.width.saturating_sub(margins);
        let plot_height = config
            .height
            .saturating_sub(margins.saturating_add(LEGEND_HEIGHT + AXIS_LABEL_HEIGHT));
        // each bar sits in a slot twice its width
        let slot = plot_width / VehicleType::ALL.len() as u32;
        let bar_width = slot / 2;
        if bar_width == 0 || plot_height < 2 {
            return Err(RenderError::CanvasTooSmall {
                width: config.width,
                height: config.height,
            });
        }

        let left = config.margin as i32;
        let mut bar_x = [0; 3];
        for (i, x) in bar_x.iter_mut().enumerate() {
            *x = left + (slot * i as u32 + slot / 4) as i32;
        }

        Ok(Self {
            baseline: (config.height - config.margin - AXIS_LABEL_HEIGHT) as i32,
            top: (config.margin + LEGEND_HEIGHT) as i32,
            left,
            bar_x,
            bar_width,
        })
    }

    /// Horizontal center of a vehicle's bar
    pub fn bar_center(&self, vehicle: VehicleType) -> i32 {
        self.bar_x[vehicle.index()] + self.bar_width as i32 / 2
    }
}

/// One bar per vehicle type, stacked by known version
///
/// Bar heights share one scale, set by the tallest bar. Vehicle names sit
/// under the axis and version names beside the legend swatches.
pub fn render_stacked_bar(
    table: &VehicleVersionTable,
    config: &ChartConfig,
) -> Result<RgbImage, RenderError> {
    let layout = BarLayout::for_config(config)?;
    let font = label_font()?;
    let mut canvas = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));

    let tallest = VehicleType::ALL
        .iter()
        .map(|&v| table.vehicle_total(v))
        .max()
        .unwrap_or(0);

    if tallest > 0 {
        let scale = (layout.baseline - layout.top) as f64 / tallest as f64;
        for vehicle in VehicleType::ALL {
            let x = layout.bar_x[vehicle.index()];
            let mut cumulative = 0usize;
            let mut segment_bottom = layout.baseline;

            for (version_idx, count) in table.row(vehicle).into_iter().enumerate() {
                if count == 0 {
                    continue;
                }
                cumulative += count;
                // cumulative rounding keeps stacked segments gap-free
                let segment_top = layout.baseline - (cumulative as f64 * scale).round() as i32;
                let height = (segment_bottom - segment_top).max(0) as u32;
                if height > 0 {
                    let rect = Rect::at(x, segment_top).of_size(layout.bar_width, height);
                    draw_filled_rect_mut(&mut canvas, rect, series_color(version_idx));
                }
                segment_bottom = segment_top;
            }
        }
    }

    draw_axes(&mut canvas, &font, &layout, config);
    draw_legend(&mut canvas, &font, config);
    Ok(canvas)
}

fn draw_axes(canvas: &mut RgbImage, font: &FontRef<'_>, layout: &BarLayout, config: &ChartConfig) {
    let right = (config.width - config.margin) as f32;
    let baseline = layout.baseline as f32;
    draw_line_segment_mut(canvas, (layout.left as f32, baseline), (right, baseline), AXIS);
    draw_line_segment_mut(
        canvas,
        (layout.left as f32, layout.top as f32),
        (layout.left as f32, baseline),
        AXIS,
    );

    let label_y = layout.baseline + AXIS_LABEL_HEIGHT as i32 / 2 + 1;
    for vehicle in VehicleType::ALL {
        draw_label_centered(canvas, font, AXIS, (layout.bar_center(vehicle), label_y), vehicle.as_str());
    }
}

fn draw_legend(canvas: &mut RgbImage, font: &FontRef<'_>, config: &ChartConfig) {
    let y = config.margin as i32;
    for (index, version) in KNOWN_VERSIONS.iter().enumerate() {
        let x = legend_x(config, index);
        let swatch = Rect::at(x, y).of_size(SWATCH, SWATCH);
        draw_filled_rect_mut(canvas, swatch, series_color(index));
        draw_hollow_rect_mut(canvas, swatch, AXIS);
        draw_label(canvas, font, AXIS, (x + SWATCH as i32 + SWATCH_TEXT_GAP, y), version);
    }
}

fn legend_x(config: &ChartConfig, index: usize) -> i32 {
    (config.margin + index as u32 * LEGEND_STEP) as i32
}
