//! Pie chart of the version histogram

use crate::config::ChartConfig;
use crate::palette::{series_color, AXIS, LABEL_ON_FILL};
use crate::text::{draw_label, draw_label_centered, label_font};
use crate::RenderError;
use ab_glyph::FontRef;
use fleet_stats::{HistogramEntry, VersionHistogram};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::f64::consts::{PI, TAU};

/// Width reserved right of the pie for the legend
const LEGEND_WIDTH: u32 = 120;
const SWATCH: u32 = 14;
const SWATCH_GAP: u32 = 8;
const SWATCH_TEXT_GAP: i32 = 6;

/// Slice labels sit at this fraction of the radius
const LABEL_RADIUS: f64 = 0.6;

/// Pie geometry for a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieLayout {
    pub center: (i32, i32),
    pub radius: i32,
    /// Top-left corner of the first legend swatch
    pub legend_origin: (i32, i32),
}

impl PieLayout {
    /// Compute the layout, or fail if the canvas is too small to hold a pie
    pub fn for_config(config: &ChartConfig) -> Result<Self, RenderError> {
        let plot_width = config.width.saturating_sub(LEGEND_WIDTH);
        let side = plot_width
            .min(config.height)
            .saturating_sub(config.margin.saturating_mul(2));
        if side < 4 {
            return Err(RenderError::CanvasTooSmall {
                width: config.width,
                height: config.height,
            });
        }

        let center = ((plot_width / 2) as i32, (config.height / 2) as i32);
        Ok(Self {
            center,
            radius: (side / 2) as i32,
            legend_origin: ((plot_width + config.margin / 2) as i32, config.margin as i32),
        })
    }

    /// Point at `radius` and `angle` radians clockwise from twelve o'clock
    fn polar(&self, radius: f64, angle: f64) -> Point<i32> {
        Point::new(
            self.center.0 + (radius * angle.sin()).round() as i32,
            self.center.1 - (radius * angle.cos()).round() as i32,
        )
    }

    fn arc_point(&self, angle: f64) -> Point<i32> {
        self.polar(self.radius as f64, angle)
    }
}

/// Draw one labelled slice per histogram bucket, clockwise from twelve o'clock
///
/// Each slice carries `version`, then `count (share%)`; the legend repeats the
/// version next to its swatch.
pub fn render_pie(histogram: &VersionHistogram, config: &ChartConfig) -> Result<RgbImage, RenderError> {
    let layout = PieLayout::for_config(config)?;
    let mut canvas = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));

    let total = histogram.total();
    if total == 0 {
        return Ok(canvas);
    }
    let font = label_font()?;
    let entries = histogram.entries();

    let mut start = 0.0_f64;
    let mut label_angles = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let sweep = entry.count as f64 / total as f64 * TAU;
        let color = series_color(index);

        if entry.count == total {
            draw_filled_circle_mut(&mut canvas, layout.center, layout.radius, color);
        } else {
            let wedge = wedge_polygon(&layout, start, sweep);
            draw_polygon_mut(&mut canvas, &wedge, color);
        }
        label_angles.push((entry.count == total, start + sweep / 2.0));
        start += sweep;
    }

    // labels go on last so no later wedge paints over them
    for (entry, (whole, angle)) in entries.iter().zip(label_angles) {
        let anchor = if whole {
            Point::new(layout.center.0, layout.center.1)
        } else {
            layout.polar(layout.radius as f64 * LABEL_RADIUS, angle)
        };
        draw_label_centered(&mut canvas, &font, LABEL_ON_FILL, (anchor.x, anchor.y), &entry.label());
    }

    draw_legend(&mut canvas, &font, &layout, &entries);
    Ok(canvas)
}

/// Center followed by points along the arc
fn wedge_polygon(layout: &PieLayout, start: f64, sweep: f64) -> Vec<Point<i32>> {
    // one vertex per ~2 degrees keeps large slices round
    let steps = ((sweep / (PI / 90.0)).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(Point::new(layout.center.0, layout.center.1));
    for step in 0..=steps {
        points.push(layout.arc_point(start + sweep * step as f64 / steps as f64));
    }
    points
}

fn draw_legend(canvas: &mut RgbImage, font: &FontRef<'_>, layout: &PieLayout, entries: &[HistogramEntry]) {
    let (x, mut y) = layout.legend_origin;
    for (index, entry) in entries.iter().enumerate() {
        if y + SWATCH as i32 > canvas.height() as i32 {
            break;
        }
        let swatch = Rect::at(x, y).of_size(SWATCH, SWATCH);
        draw_filled_rect_mut(canvas, swatch, series_color(index));
        draw_hollow_rect_mut(canvas, swatch, AXIS);
        draw_label(canvas, font, AXIS, (x + SWATCH as i32 + SWATCH_TEXT_GAP, y), &entry.version);
        y += (SWATCH + SWATCH_GAP) as i32;
    }
}
