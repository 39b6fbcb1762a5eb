//! Image file decoding and encoding for gratings.

use std::fs;
use std::path::Path;

use grating_core::{Grating, ImageDecoder, RgbaBuffer};

/// Decodes image files with the `image` crate.
///
/// Supports common formats (PNG, BMP, JPEG, TIFF). Every image is
/// converted to RGBA8 so it can back a grating verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileDecoder;

impl ImageDecoder for ImageFileDecoder {
    type Error = ImageIoError;

    fn decode(&self, path: &Path) -> Result<RgbaBuffer, Self::Error> {
        read_rgba(path)
    }
}

/// Load an image from disk as an RGBA8 buffer.
pub fn read_rgba(path: &Path) -> Result<RgbaBuffer, ImageIoError> {
    let img = image::open(path).map_err(ImageIoError::Decode)?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RgbaBuffer::new(width, height, rgba.into_raw()))
}

/// Write a grating to `path`, creating parent directories as needed.
///
/// The format follows the file extension.
pub fn write_grating(path: &Path, grating: &Grating) -> Result<(), ImageIoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let RgbaBuffer {
        width,
        height,
        data,
    } = grating.to_rgba();
    let img = image::RgbaImage::from_raw(width, height, data)
        .ok_or(ImageIoError::BufferSize { width, height })?;
    img.save(path).map_err(ImageIoError::Encode)
}

/// Errors that can occur while reading or writing image files.
#[derive(Debug, thiserror::Error)]
pub enum ImageIoError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("RGBA buffer does not hold {width}x{height} pixels")]
    BufferSize { width: u32, height: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use grating_core::Pixel;
    use tempfile::TempDir;

    #[test]
    fn test_png_round_trip_keeps_pixels() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("round_trip.png");

        let mut grating = Grating::new(3, 2).unwrap();
        grating.set_pixel(2, 1, Pixel::new(10, 20, 30, 40)).unwrap();
        grating.set_pixel_mono(0, 0, 200.0).unwrap();
        write_grating(&path, &grating).unwrap();

        let decoded = ImageFileDecoder.decode(&path).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(Grating::from_rgba(3, 2, decoded).unwrap(), grating);
    }

    #[test]
    fn test_decode_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.png");
        assert!(matches!(read_rgba(&path), Err(ImageIoError::Decode(_))));
    }
}
