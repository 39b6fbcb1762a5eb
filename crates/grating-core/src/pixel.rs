//! Pixel and pattern value types.

use bytemuck::{Pod, Zeroable};

/// One RGBA pixel, 8 bits per channel.
///
/// The layout matches four consecutive bytes of a grating buffer, so a
/// buffer can be viewed as `&[Pixel]` without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity. 255 = fully opaque.
    pub alpha: u8,
}

impl Pixel {
    /// Fully transparent black, the content of a blank grating.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    /// Opaque gray pixel with all color channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value, 255)
    }

    /// Opaque gray pixel from a real luminance, clamped to `[0, 255]`.
    pub fn gray_clamped(value: f64) -> Self {
        Self::gray(clamp_channel(value))
    }

    /// Whether all color channels are equal and the pixel is opaque.
    pub const fn is_mono(&self) -> bool {
        self.r == self.g && self.g == self.b && self.alpha == 255
    }

    /// Channels in buffer order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, alpha]: [u8; 4]) -> Self {
        Self::new(r, g, b, alpha)
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

/// Round a real channel value to the nearest byte, saturating at the
/// bounds. NaN maps to 0.
pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Value produced by a pattern at one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternValue {
    /// Luminance broadcast to an opaque gray pixel.
    Mono(f64),
    /// Full RGBA value written verbatim.
    Rgba(Pixel),
}

impl PatternValue {
    /// Resolve to the pixel a grating stores for this value.
    pub fn to_pixel(self) -> Pixel {
        match self {
            Self::Mono(value) => Pixel::gray_clamped(value),
            Self::Rgba(pixel) => pixel,
        }
    }
}

impl From<f64> for PatternValue {
    fn from(value: f64) -> Self {
        Self::Mono(value)
    }
}

impl From<Pixel> for PatternValue {
    fn from(pixel: Pixel) -> Self {
        Self::Rgba(pixel)
    }
}

/// Channel weights for reading a colored pixel as luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LumaWeights {
    /// `0.2126r + 0.7152g + 0.0722g`. The blue weight is applied to the
    /// green channel; kept as the default so existing gratings read back
    /// identically.
    #[default]
    Historical,
    /// Rec. 709 weights, `0.2126r + 0.7152g + 0.0722b`.
    Rec709,
}

impl LumaWeights {
    /// Luminance of `pixel`. Equal-channel pixels return `r` unchanged.
    pub fn luminance(self, pixel: Pixel) -> u8 {
        let Pixel { r, g, b, .. } = pixel;
        if r == g && g == b {
            return r;
        }
        let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
        let luma = match self {
            Self::Historical => 0.2126 * r + 0.7152 * g + 0.0722 * g,
            Self::Rec709 => 0.2126 * r + 0.7152 * g + 0.0722 * b,
        };
        clamp_channel(luma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_channel_saturates_and_rounds() {
        assert_eq!(clamp_channel(-12.0), 0);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(4.6), 5);
        assert_eq!(clamp_channel(f64::NAN), 0);
        assert_eq!(clamp_channel(f64::INFINITY), 255);
    }

    #[test]
    fn test_gray_is_mono() {
        assert!(Pixel::gray(17).is_mono());
        assert!(!Pixel::new(17, 17, 17, 0).is_mono());
        assert!(!Pixel::new(1, 2, 3, 255).is_mono());
    }

    #[test]
    fn test_historical_luma_ignores_blue() {
        let a = Pixel::new(100, 50, 0, 255);
        let b = Pixel::new(100, 50, 255, 255);
        assert_eq!(LumaWeights::Historical.luminance(a), LumaWeights::Historical.luminance(b));
        // 21.26 + 35.76 + 3.61 = 60.63
        assert_eq!(LumaWeights::Historical.luminance(a), 61);
    }

    #[test]
    fn test_rec709_luma_uses_blue() {
        let pixel = Pixel::new(100, 50, 200, 255);
        // 21.26 + 35.76 + 14.44 = 71.46
        assert_eq!(LumaWeights::Rec709.luminance(pixel), 71);
    }

    #[test]
    fn test_pattern_value_to_pixel() {
        assert_eq!(PatternValue::Mono(5.0).to_pixel(), Pixel::gray(5));
        let red = Pixel::new(255, 0, 0, 127);
        assert_eq!(PatternValue::Rgba(red).to_pixel(), red);
    }
}
