//! Grating Core — domain layer for SLM grating composition.
//!
//! This crate contains the grating raster model, its per-pixel algebra,
//! the pattern library and the blaze generator. No file or display I/O;
//! images enter and leave through [`RgbaBuffer`].

pub mod blaze;
pub mod compose;
pub mod error;
pub mod grating;
pub mod image;
pub mod pattern;
pub mod pixel;
pub mod validate;

// Re-exports for convenience.
pub use blaze::{BlazeConfig, blaze_grating};
pub use compose::{ImageDecoder, Layer, LayerSet, build_layers, compose};
pub use error::{ComposeError, GratingError};
pub use grating::Grating;
pub use image::RgbaBuffer;
pub use pattern::{BoxedPattern, Pattern, PatternTransformer};
pub use pixel::{LumaWeights, PatternValue, Pixel};
