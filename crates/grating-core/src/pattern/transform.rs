//! Coordinate remaps applied before sampling a pattern.
//!
//! A [`PatternTransformer`] holds an ordered list of remaps. Transforming a
//! pattern composes them left to right: the first remap appended receives
//! the raw sampling coordinate, each following one receives the output of
//! the previous, and the wrapped pattern is sampled at the final result.
//!
//! Builder calls return a new transformer and leave the receiver
//! untouched, so one transformer can be shared and extended in several
//! directions.

use std::fmt;
use std::sync::Arc;

use glam::DVec2;

use super::Pattern;
use crate::pixel::PatternValue;

/// One coordinate remap.
pub type PatternTransform = Arc<dyn Fn(DVec2) -> DVec2 + Send + Sync>;

/// Ordered, immutable chain of coordinate remaps.
#[derive(Clone, Default)]
pub struct PatternTransformer {
    remaps: Vec<PatternTransform>,
}

impl PatternTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the sampling grid by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let offset = DVec2::new(dx, dy);
        self.push(Arc::new(move |at: DVec2| at + offset))
    }

    /// Rotate the sampling grid by `angle` radians (standard 2D rotation).
    pub fn rotate(&self, angle: f64) -> Self {
        let rotation = DVec2::from_angle(angle);
        self.push(Arc::new(move |at: DVec2| rotation.rotate(at)))
    }

    /// Divide coordinates by `(sx, sy)`, zooming the pattern in by that
    /// factor.
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        let factor = DVec2::new(sx, sy);
        self.push(Arc::new(move |at: DVec2| at / factor))
    }

    /// Append an arbitrary remap.
    pub fn custom<F>(&self, remap: F) -> Self
    where
        F: Fn(DVec2) -> DVec2 + Send + Sync + 'static,
    {
        self.push(Arc::new(remap))
    }

    /// Number of queued remaps.
    pub fn len(&self) -> usize {
        self.remaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaps.is_empty()
    }

    /// Apply every remap to `at`, in append order.
    pub fn remap(&self, at: DVec2) -> DVec2 {
        self.remaps.iter().fold(at, |at, remap| remap(at))
    }

    /// Wrap `pattern` so it is sampled in the transformed coordinate space.
    pub fn transform<P: Pattern>(&self, pattern: P) -> Transformed<P> {
        Transformed {
            transformer: self.clone(),
            inner: pattern,
        }
    }

    fn push(&self, remap: PatternTransform) -> Self {
        let mut remaps = self.remaps.clone();
        remaps.push(remap);
        Self { remaps }
    }
}

impl fmt::Debug for PatternTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternTransformer")
            .field("remaps", &self.remaps.len())
            .finish()
    }
}

/// A pattern sampled through a [`PatternTransformer`].
#[derive(Clone, Debug)]
pub struct Transformed<P> {
    transformer: PatternTransformer,
    inner: P,
}

impl<P: Pattern> Pattern for Transformed<P> {
    fn sample(&self, at: DVec2) -> PatternValue {
        self.inner.sample(self.transformer.remap(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::from_fn;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: DVec2, expected: DVec2) {
        assert!(
            (actual - expected).length() < EPSILON,
            "{actual:?} vs {expected:?}"
        );
    }

    #[test]
    fn test_empty_transformer_is_identity() {
        let t = PatternTransformer::new();
        assert!(t.is_empty());
        assert_close(t.remap(DVec2::new(3.0, -4.0)), DVec2::new(3.0, -4.0));
    }

    #[test]
    fn test_translate_rotate_scale() {
        assert_close(
            PatternTransformer::new().translate(2.0, -1.0).remap(DVec2::new(1.0, 1.0)),
            DVec2::new(3.0, 0.0),
        );
        assert_close(
            PatternTransformer::new().rotate(FRAC_PI_2).remap(DVec2::new(1.0, 0.0)),
            DVec2::new(0.0, 1.0),
        );
        assert_close(
            PatternTransformer::new().scale(2.0, 4.0).remap(DVec2::new(8.0, 8.0)),
            DVec2::new(4.0, 2.0),
        );
    }

    #[test]
    fn test_remaps_apply_in_append_order() {
        let translate_then_scale = PatternTransformer::new().translate(2.0, 0.0).scale(2.0, 1.0);
        let scale_then_translate = PatternTransformer::new().scale(2.0, 1.0).translate(2.0, 0.0);
        let at = DVec2::new(4.0, 0.0);
        assert_close(translate_then_scale.remap(at), DVec2::new(3.0, 0.0));
        assert_close(scale_then_translate.remap(at), DVec2::new(4.0, 0.0));
    }

    #[test]
    fn test_builder_does_not_mutate_receiver() {
        let base = PatternTransformer::new().translate(1.0, 1.0);
        let extended = base.scale(2.0, 2.0);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_transform_wraps_pattern() {
        let centred = PatternTransformer::new()
            .translate(-10.0, -10.0)
            .custom(|at| at * 3.0)
            .transform(from_fn(|x, y| x + y));
        // (12, 11) -> (2, 1) -> (6, 3)
        assert_eq!(centred.sample_at(12, 11), PatternValue::Mono(9.0));
    }
}
