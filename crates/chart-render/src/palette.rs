//! Series colors

use image::Rgb;

/// Slice and segment colors, cycled by index
pub const PALETTE: [Rgb<u8>; 8] = [
    Rgb([54, 162, 235]),
    Rgb([255, 99, 132]),
    Rgb([255, 205, 86]),
    Rgb([75, 192, 192]),
    Rgb([153, 102, 255]),
    Rgb([255, 159, 64]),
    Rgb([201, 203, 207]),
    Rgb([46, 139, 87]),
];

/// Axis, outline and legend text color
pub const AXIS: Rgb<u8> = Rgb([64, 64, 64]);

/// Text drawn over a colored fill
pub const LABEL_ON_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Color for the series at `index`
pub fn series_color(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}
