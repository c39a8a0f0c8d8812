//! Label text

use crate::RenderError;
use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// DejaVu Sans, license in `assets/DejaVuSans-LICENSE`
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Glyph height of every label (pixels)
pub const LABEL_SCALE: f32 = 13.0;

const LINE_GAP: i32 = 2;

/// Load the embedded label font
pub fn label_font() -> Result<FontRef<'static>, RenderError> {
    Ok(FontRef::try_from_slice(FONT_DATA)?)
}

fn line_height() -> i32 {
    LABEL_SCALE.ceil() as i32 + LINE_GAP
}

/// Draw text from its top-left corner; `\n` starts a new line
pub fn draw_label(canvas: &mut RgbImage, font: &FontRef<'_>, color: Rgb<u8>, (x, y): (i32, i32), text: &str) {
    for (index, line) in text.lines().enumerate() {
        let line_y = y + index as i32 * line_height();
        draw_text_mut(canvas, color, x, line_y, PxScale::from(LABEL_SCALE), font, line);
    }
}

/// Draw text with every line centered on `x` and the block centered on `y`
pub fn draw_label_centered(
    canvas: &mut RgbImage,
    font: &FontRef<'_>,
    color: Rgb<u8>,
    (x, y): (i32, i32),
    text: &str,
) {
    let scale = PxScale::from(LABEL_SCALE);
    let lines: Vec<&str> = text.lines().collect();
    let block = lines.len() as i32 * line_height() - LINE_GAP;
    let mut line_y = y - block / 2;

    for line in lines {
        let (width, _) = text_size(scale, font, line);
        draw_text_mut(canvas, color, x - width as i32 / 2, line_y, scale, font, line);
        line_y += line_height();
    }
}

/// Whether any pixel of the region differs from `background`
#[cfg(test)]
pub(crate) fn has_ink(image: &RgbImage, (x, y): (i32, i32), (w, h): (u32, u32), background: Rgb<u8>) -> bool {
    (x.max(0) as u32..(x.max(0) as u32 + w).min(image.width()))
        .flat_map(|px| (y.max(0) as u32..(y.max(0) as u32 + h).min(image.height())).map(move |py| (px, py)))
        .any(|(px, py)| *image.get_pixel(px, py) != background)
}
