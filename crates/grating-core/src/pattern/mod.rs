//! Patterns — pure coordinate-to-value functions used to fill gratings.
//!
//! A pattern is sampled by [`Grating::from_pattern`](crate::Grating::from_pattern)
//! at integer pixel coordinates, but takes real coordinates so that
//! [`PatternTransformer`] can rotate and scale the sampling grid.

pub mod common;
pub mod expr;
pub mod kinoform;
pub mod transform;

use std::sync::Arc;

use glam::DVec2;

use crate::pixel::PatternValue;

pub use transform::PatternTransformer;

/// A function from coordinates to a luminance or an RGBA value.
///
/// Patterns enforce no bounds; the grating that samples them does.
pub trait Pattern: Send + Sync {
    /// Value at `at`.
    fn sample(&self, at: DVec2) -> PatternValue;

    /// Value at integer pixel `(x, y)`.
    fn sample_at(&self, x: u32, y: u32) -> PatternValue {
        self.sample(DVec2::new(f64::from(x), f64::from(y)))
    }
}

/// Owned, type-erased pattern.
pub type BoxedPattern = Box<dyn Pattern>;

impl<P: Pattern + ?Sized> Pattern for Box<P> {
    fn sample(&self, at: DVec2) -> PatternValue {
        (**self).sample(at)
    }
}

impl<P: Pattern + ?Sized> Pattern for Arc<P> {
    fn sample(&self, at: DVec2) -> PatternValue {
        (**self).sample(at)
    }
}

/// Pattern backed by a closure `(x, y) -> value`.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnPattern<F> {
    f: F,
}

impl<F, V> Pattern for FnPattern<F>
where
    F: Fn(f64, f64) -> V + Send + Sync,
    V: Into<PatternValue>,
{
    fn sample(&self, at: DVec2) -> PatternValue {
        (self.f)(at.x, at.y).into()
    }
}

/// Wrap a closure returning `f64` (mono) or [`Pixel`](crate::Pixel) (RGBA)
/// as a pattern.
///
/// ```
/// use grating_core::{Grating, pattern::from_fn};
///
/// let linear = from_fn(|x, y| x + y);
/// let grating = Grating::from_pattern(4, 4, &linear).unwrap();
/// assert_eq!(grating.get_pixel_mono(2, 3).unwrap(), 5);
/// ```
pub fn from_fn<F, V>(f: F) -> FnPattern<F>
where
    F: Fn(f64, f64) -> V + Send + Sync,
    V: Into<PatternValue>,
{
    FnPattern { f }
}
