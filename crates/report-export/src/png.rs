//! PNG chart export

use crate::ExportError;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write an image to a PNG file, replacing it if present
pub fn write_png_file<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, encode_png(image)?)?;
    info!("Wrote chart {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_png_signature() {
        let image = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::PIE_CHART_FILE);
        let image = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));

        write_png_file(&image, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(*loaded.get_pixel(0, 0), Rgb([10, 20, 30]));
    }
}
