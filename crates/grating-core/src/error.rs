//! Error types for grating construction, access and composition.

use std::path::PathBuf;

/// Validation failures raised by the grating model.
///
/// Every variant is a local, synchronous failure: nothing is retried and
/// no operation is partially applied when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GratingError {
    #[error("invalid dimension \"{name}\": {value} is not a positive integer")]
    InvalidDimension { name: &'static str, value: String },
    #[error("pixel ({x}, {y}) is outside a {width}x{height} grating")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("buffer is {buffer_width}x{buffer_height} ({buffer_len} bytes) but {width}x{height} was requested")]
    DimensionMismatch {
        width: u32,
        height: u32,
        buffer_width: u32,
        buffer_height: u32,
        buffer_len: usize,
    },
    #[error("grating is {width}x{height} but operand is {other_width}x{other_height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        other_width: u32,
        other_height: u32,
    },
    #[error("blaze count of {count} can't fit in {width} pixels width")]
    BlazeTooWide { count: u32, width: u32 },
    #[error("mono only available if pixel alpha is 255, pixel ({x}, {y}) has alpha {alpha}")]
    NonOpaqueMono { x: u32, y: u32, alpha: u8 },
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("invalid argument \"{name}\": {value}")]
    InvalidArgument { name: &'static str, value: String },
}

/// Errors raised while building and merging layers.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Grating(#[from] GratingError),
    #[error("image {} does not fit the grating: {source}", .path.display())]
    InvalidImage {
        path: PathBuf,
        #[source]
        source: GratingError,
    },
    #[error("failed to load layer {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
