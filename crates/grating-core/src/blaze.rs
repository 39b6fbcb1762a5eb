//! Blaze gratings — tilted sawtooth phase ramps for steering diffraction
//! orders.
//!
//! # Algorithm
//! Each pixel coordinate is rotated by `π/4 - tilt`. Two sawtooth ramps
//! are taken along the rotated axes and summed:
//! ```text
//! period     = 2 × width / count
//! slope      = 0.5 × count × max / 255
//! brightness = slope × (x' mod period) + slope × (y' mod period)
//! ```
//! The brightness is written as an opaque gray pixel, clamped to
//! `[0, 255]`.

use std::f64::consts::FRAC_PI_4;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::GratingError;
use crate::grating::Grating;
use crate::validate::{ensure_positive, parse_dimension, parse_finite};

/// Parameters of a blaze grating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlazeConfig {
    /// Number of ramp periods across the grating width. Must not exceed
    /// the width.
    pub count: u32,
    /// Peak brightness scale, `0..=255`.
    pub max: u8,
    /// Rotation of the ramps in radians. 0.0 = no tilt.
    #[serde(default)]
    pub tilt: f64,
}

impl BlazeConfig {
    pub fn new(count: u32, max: u8, tilt: f64) -> Self {
        Self { count, max, tilt }
    }

    /// Spatial period of each ramp for a grating `width` pixels wide.
    pub fn period(&self, width: u32) -> f64 {
        2.0 * f64::from(width) / f64::from(self.count)
    }

    /// Brightness gained per pixel along each rotated axis.
    pub fn slope(&self) -> f64 {
        0.5 * f64::from(self.count) * (f64::from(self.max) / 255.0)
    }
}

impl FromStr for BlazeConfig {
    type Err = GratingError;

    /// Parse `"count,max[,tilt]"`, e.g. `"25,255"` or `"800,255,0.87"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let (count, max, tilt) = match parts.as_slice() {
            [count, max] => (count, max, None),
            [count, max, tilt] => (count, max, Some(tilt)),
            _ => {
                return Err(GratingError::InvalidArgument {
                    name: "blaze",
                    value: s.to_string(),
                });
            }
        };

        let count = parse_dimension("blaze_count", count)?;
        let max = max.parse::<u8>().map_err(|_| GratingError::InvalidDimension {
            name: "blaze_max",
            value: max.to_string(),
        })?;
        let tilt = match tilt {
            Some(tilt) => parse_finite("blaze_tilt", tilt)?,
            None => 0.0,
        };
        Ok(Self { count, max, tilt })
    }
}

/// Build a grating filled with a blaze ramp.
///
/// Fails with [`GratingError::BlazeTooWide`] if `config.count` exceeds
/// `width`, and [`GratingError::InvalidDimension`] if it is zero.
pub fn blaze_grating(width: u32, height: u32, config: &BlazeConfig) -> Result<Grating, GratingError> {
    ensure_positive(config.count, "blaze_count")?;
    if config.count > width {
        return Err(GratingError::BlazeTooWide {
            count: config.count,
            width,
        });
    }

    let mut grating = Grating::new(width, height)?;
    let rotation = DVec2::from_angle(FRAC_PI_4 - config.tilt);
    let period = config.period(width);
    let slope = config.slope();
    let mut clamped = 0usize;

    for y in 0..height {
        for x in 0..width {
            let at = rotation.rotate(DVec2::new(f64::from(x), f64::from(y)));
            let brightness = slope * at.x.rem_euclid(period) + slope * at.y.rem_euclid(period);
            if brightness.round() > 255.0 {
                clamped += 1;
            }
            grating.set_pixel_mono(x, y, brightness)?;
        }
    }

    if clamped > 0 {
        warn!(
            "blaze grating (count={}, max={}) clamped {clamped} of {} pixels to 255",
            config.count,
            config.max,
            u64::from(width) * u64::from(height)
        );
    }

    debug!(
        "built {width}x{height} blaze grating (count={}, max={}, tilt={:.4})",
        config.count, config.max, config.tilt
    );
    Ok(grating)
}
