//! Fixed-size RGBA raster and its per-pixel algebra.
//!
//! A [`Grating`] owns a row-major RGBA8 buffer with its origin at the top
//! left, `x` growing rightward and `y` downward. Channel `c` of pixel
//! `(x, y)` lives at byte `4 * (x + y * width) + c`.
//!
//! # Algebra
//! Binary operations fold any number of same-sized operands over a copy
//! of the receiver, left to right, channel by channel:
//! ```text
//! add       a + b            (mod 256)
//! subtract  a - b            (mod 256)
//! multiply  round(a × b / 255)
//! divide    round(a × 255 / b), saturating at 255, b = 0 → 255
//! ```
//! Operands are never mutated.

use tracing::debug;

use crate::error::GratingError;
use crate::image::RgbaBuffer;
use crate::pattern::Pattern;
use crate::pixel::{LumaWeights, Pixel, clamp_channel};
use crate::validate::{ensure_positive, rgba_len};

/// A fixed-size RGBA raster used as a diffraction or phase pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grating {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Grating {
    /// Construct a blank grating. Every byte is zero (transparent black).
    pub fn new(width: u32, height: u32) -> Result<Self, GratingError> {
        ensure_positive(width, "grating_width")?;
        ensure_positive(height, "grating_height")?;
        let len = rgba_len(width, height).ok_or_else(|| GratingError::InvalidDimension {
            name: "grating_size",
            value: format!("{width}x{height}"),
        })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Construct a grating filled by sampling `pattern` at every pixel.
    ///
    /// Pixels are visited in row-major order. Mono values are written as
    /// opaque gray, RGBA values verbatim.
    pub fn from_pattern<P>(width: u32, height: u32, pattern: &P) -> Result<Self, GratingError>
    where
        P: Pattern + ?Sized,
    {
        let mut grating = Self::new(width, height)?;
        let row = width as usize;
        for (i, texel) in grating.as_pixels_mut().iter_mut().enumerate() {
            let (x, y) = ((i % row) as u32, (i / row) as u32);
            *texel = pattern.sample_at(x, y).to_pixel();
        }
        debug!("sampled {width}x{height} grating from pattern");
        Ok(grating)
    }

    /// Take over an external RGBA buffer (e.g. a decoded image) verbatim.
    ///
    /// Fails with [`GratingError::DimensionMismatch`] if the buffer's
    /// declared size differs from the requested one, or if its byte length
    /// does not match its declared size.
    pub fn from_rgba(width: u32, height: u32, image: RgbaBuffer) -> Result<Self, GratingError> {
        let blank = Self::new(width, height)?;
        if image.dimensions() != (width, height) || image.data.len() != blank.data.len() {
            return Err(GratingError::DimensionMismatch {
                width,
                height,
                buffer_width: image.width,
                buffer_height: image.height,
                buffer_len: image.data.len(),
            });
        }
        Ok(Self {
            data: image.data,
            ..blank
        })
    }

    /// Grating width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grating height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` of the grating.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA buffer, `width * height * 4` bytes.
    pub fn raw_pixels(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw buffer. The slice cannot change length, so the size
    /// invariant holds; every byte value is a valid channel.
    pub fn raw_pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Iterate over `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        let width = self.width as usize;
        self.as_pixels()
            .iter()
            .enumerate()
            .map(move |(i, px)| ((i % width) as u32, (i / width) as u32, *px))
    }

    /// Copy the buffer out for an image encoder.
    pub fn to_rgba(&self) -> RgbaBuffer {
        RgbaBuffer::new(self.width, self.height, self.data.clone())
    }

    /// Hand the buffer to an image encoder without copying.
    pub fn into_rgba(self) -> RgbaBuffer {
        RgbaBuffer::new(self.width, self.height, self.data)
    }

    /// Read pixel `(x, y)`.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel, GratingError> {
        let index = self.index_of(x, y)?;
        Ok(self.as_pixels()[index])
    }

    /// Write all four channels of pixel `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), GratingError> {
        let index = self.index_of(x, y)?;
        self.as_pixels_mut()[index] = pixel;
        Ok(())
    }

    /// Read pixel `(x, y)` as luminance using the historical weights.
    ///
    /// See [`LumaWeights::Historical`]. Non-opaque pixels are rejected.
    pub fn get_pixel_mono(&self, x: u32, y: u32) -> Result<u8, GratingError> {
        self.get_pixel_mono_with(x, y, LumaWeights::Historical)
    }

    /// Read pixel `(x, y)` as luminance using the given channel weights.
    pub fn get_pixel_mono_with(
        &self,
        x: u32,
        y: u32,
        weights: LumaWeights,
    ) -> Result<u8, GratingError> {
        let pixel = self.get_pixel(x, y)?;
        if pixel.alpha != 255 {
            return Err(GratingError::NonOpaqueMono {
                x,
                y,
                alpha: pixel.alpha,
            });
        }
        Ok(weights.luminance(pixel))
    }

    /// Write an opaque gray pixel. `brightness` is rounded and clamped to
    /// `[0, 255]`.
    pub fn set_pixel_mono(&mut self, x: u32, y: u32, brightness: f64) -> Result<(), GratingError> {
        self.set_pixel(x, y, Pixel::gray(clamp_channel(brightness)))
    }

    /// Per-channel wrapping sum of the receiver and every operand.
    pub fn add(&self, others: &[Grating]) -> Result<Self, GratingError> {
        self.fold_channels(others, u8::wrapping_add)
    }

    /// Per-channel wrapping difference of the receiver and every operand.
    pub fn subtract(&self, others: &[Grating]) -> Result<Self, GratingError> {
        self.fold_channels(others, u8::wrapping_sub)
    }

    /// Per-channel product scaled back to `[0, 255]`.
    pub fn multiply(&self, others: &[Grating]) -> Result<Self, GratingError> {
        self.fold_channels(others, multiply_channel)
    }

    /// Per-channel quotient scaled to `[0, 255]`; division by zero
    /// saturates to 255.
    pub fn divide(&self, others: &[Grating]) -> Result<Self, GratingError> {
        self.fold_channels(others, divide_channel)
    }

    /// New grating with every channel replaced by `255 - value`.
    pub fn invert(&self) -> Self {
        self.map_raw_pixels(|value| 255 - value)
    }

    /// New grating with every channel replaced by `255 / value`
    /// (integer division). Zero channels saturate to 255.
    pub fn oppose(&self) -> Self {
        self.map_raw_pixels(|value| if value == 0 { 255 } else { 255 / value })
    }

    /// New grating with every raw byte passed through `map`.
    pub fn map_raw_pixels<F>(&self, mut map: F) -> Self
    where
        F: FnMut(u8) -> u8,
    {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&value| map(value)).collect(),
        }
    }

    /// New grating with every pixel replaced by `map(x, y, pixel)`.
    pub fn map_pixels<F>(&self, mut map: F) -> Self
    where
        F: FnMut(u32, u32, Pixel) -> Pixel,
    {
        let mut result = self.clone();
        let width = self.width as usize;
        for (i, px) in result.as_pixels_mut().iter_mut().enumerate() {
            *px = map((i % width) as u32, (i / width) as u32, *px);
        }
        result
    }

    fn fold_channels(&self, others: &[Grating], op: fn(u8, u8) -> u8) -> Result<Self, GratingError> {
        if let Some(other) = others.iter().find(|g| g.size() != self.size()) {
            return Err(GratingError::SizeMismatch {
                width: self.width,
                height: self.height,
                other_width: other.width,
                other_height: other.height,
            });
        }

        let mut result = self.clone();
        for other in others {
            for (acc, &value) in result.data.iter_mut().zip(&other.data) {
                *acc = op(*acc, value);
            }
        }
        Ok(result)
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, GratingError> {
        if x >= self.width || y >= self.height {
            return Err(GratingError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize + y as usize * self.width as usize)
    }

    fn as_pixels(&self) -> &[Pixel] {
        bytemuck::cast_slice(&self.data)
    }

    fn as_pixels_mut(&mut self) -> &mut [Pixel] {
        bytemuck::cast_slice_mut(&mut self.data)
    }
}

fn multiply_channel(a: u8, b: u8) -> u8 {
    ((u32::from(a) * u32::from(b) + 127) / 255) as u8
}

fn divide_channel(a: u8, b: u8) -> u8 {
    if b == 0 {
        return 255;
    }
    let b = u32::from(b);
    ((u32::from(a) * 255 + b / 2) / b).min(255) as u8
}
