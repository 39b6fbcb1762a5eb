//! Built-in mask and noise patterns.
//!
//! Masks follow the "outside is bright" convention: the shape itself is
//! dark (0) and everything else is 255, unless inverted.

use rand::Rng;

use super::{Pattern, from_fn};

/// Circular mask: 0 within `radius` of `(offset_x, offset_y)`, 255 beyond.
pub fn circle(
    radius: f64,
    offset_x: f64,
    offset_y: f64,
) -> impl Pattern + Clone {
    from_fn(move |x, y| {
        if (x - offset_x).hypot(y - offset_y) > radius {
            255.0
        } else {
            0.0
        }
    })
}

/// Rectangular mask with a strict interior test.
///
/// Not inverted: 0 strictly inside the box, 255 elsewhere. Inverted: the
/// opposite.
pub fn rect(
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    invert: bool,
) -> impl Pattern + Clone {
    from_fn(move |x, y| {
        let inside = x > x_min && x < x_max && y > y_min && y < y_max;
        if inside == invert { 255.0 } else { 0.0 }
    })
}

/// Uniform noise in `[min, max)`, drawn fresh on every sample.
///
/// The value does not depend on the coordinate and the sequence cannot be
/// replayed. An empty range always yields `min`. `max - min` must be
/// finite; wider spans make the sampler panic.
pub fn random(min: f64, max: f64) -> impl Pattern + Clone {
    from_fn(move |_, _| {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..max)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PatternValue;

    #[test]
    fn test_circle_is_dark_inside() {
        let pattern = circle(10.0, 5.0, 5.0);
        assert_eq!(pattern.sample_at(5, 5), PatternValue::Mono(0.0));
        assert_eq!(pattern.sample_at(20, 5), PatternValue::Mono(255.0));
        // distance exactly equal to the radius is inside
        assert_eq!(pattern.sample_at(15, 5), PatternValue::Mono(0.0));
    }

    #[test]
    fn test_rect_strict_interior() {
        let pattern = rect(10.0, 20.0, 10.0, 20.0, false);
        assert_eq!(pattern.sample_at(15, 15), PatternValue::Mono(0.0));
        assert_eq!(pattern.sample_at(0, 0), PatternValue::Mono(255.0));
        assert_eq!(pattern.sample_at(10, 15), PatternValue::Mono(255.0));
    }

    #[test]
    fn test_rect_inverted() {
        let pattern = rect(10.0, 20.0, 10.0, 20.0, true);
        assert_eq!(pattern.sample_at(15, 15), PatternValue::Mono(255.0));
        assert_eq!(pattern.sample_at(0, 0), PatternValue::Mono(0.0));
    }

    #[test]
    fn test_random_stays_in_range() {
        let pattern = random(10.0, 20.0);
        for i in 0..500 {
            let PatternValue::Mono(v) = pattern.sample_at(i, 0) else {
                panic!("random pattern must be mono");
            };
            assert!((10.0..20.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn test_random_empty_range_yields_min() {
        assert_eq!(random(7.0, 7.0).sample_at(0, 0), PatternValue::Mono(7.0));
    }
}
