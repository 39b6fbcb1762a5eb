//! Raw image buffers exchanged with decoders and encoders.

/// Interleaved RGBA8 image as produced by an image decoder.
///
/// No invariant ties `data.len()` to the declared size here; gratings
/// check it when they take the buffer over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// `(width, height)` of the image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
