//! Parser for pattern expressions given on the command line.
//!
//! Supported syntax is a call to a built-in pattern, optionally prefixed
//! by its namespace:
//! ```text
//! circle(radius, x, y)
//! rect(x_min, x_max, y_min, y_max[, invert])
//! random([min, max])
//! hermite_gauss(p, q, waist)
//! $common:rect(10, 20, 10, 20)
//! $kinoform:hermite_gauss(4, 4, 41)
//! ```
//! Arrow-function expressions such as `(x, y) => x + y` are recognised
//! but not evaluated.

use super::common::{circle, random, rect};
use super::kinoform::hermite_gauss_kinoform;
use super::BoxedPattern;
use crate::error::GratingError;
use crate::validate::parse_finite;

/// Namespaces accepted in the `$namespace:` prefix.
const NAMESPACES: [&str; 2] = ["common", "kinoform"];

/// Default range of `random()` without arguments.
const RANDOM_DEFAULT: (f64, f64) = (0.0, 255.0);

/// Parse a pattern expression into a boxed pattern.
pub fn parse(input: &str) -> Result<BoxedPattern, GratingError> {
    let expr = input.trim();
    if expr.contains("=>") {
        return Err(GratingError::NotImplemented("arrow-function pattern expressions"));
    }

    let call = match expr.strip_prefix('$') {
        Some(qualified) => {
            let (namespace, call) = qualified.split_once(':').ok_or_else(|| invalid(expr))?;
            if !NAMESPACES.contains(&namespace.trim()) {
                return Err(GratingError::InvalidArgument {
                    name: "pattern_namespace",
                    value: namespace.trim().to_string(),
                });
            }
            call
        }
        None => expr,
    };

    let (name, args) = split_call(call).ok_or_else(|| invalid(expr))?;
    let pattern: BoxedPattern = match (name, args.as_slice()) {
        ("circle", [radius, x, y]) => Box::new(circle(
            parse_finite("circle_radius", radius)?,
            parse_finite("circle_x", x)?,
            parse_finite("circle_y", y)?,
        )),
        ("rect", [x_min, x_max, y_min, y_max, rest @ ..]) if rest.len() <= 1 => {
            let invert = match rest.first() {
                Some(flag) => parse_bool("rect_invert", flag)?,
                None => false,
            };
            Box::new(rect(
                parse_finite("rect_x_min", x_min)?,
                parse_finite("rect_x_max", x_max)?,
                parse_finite("rect_y_min", y_min)?,
                parse_finite("rect_y_max", y_max)?,
                invert,
            ))
        }
        ("random", []) => Box::new(random(RANDOM_DEFAULT.0, RANDOM_DEFAULT.1)),
        ("random", [min, max]) => {
            let (low, high) = (parse_finite("random_min", min)?, parse_finite("random_max", max)?);
            // the sampler cannot draw from a span wider than f64::MAX
            if !(high - low).is_finite() {
                return Err(GratingError::InvalidArgument {
                    name: "random_range",
                    value: format!("{min}..{max}"),
                });
            }
            Box::new(random(low, high))
        }
        ("hermite_gauss", [p, q, waist]) => {
            let waist_px = parse_finite("hermite_gauss_waist", waist)?;
            if waist_px <= 0.0 {
                return Err(GratingError::InvalidArgument {
                    name: "hermite_gauss_waist",
                    value: waist.to_string(),
                });
            }
            Box::new(hermite_gauss_kinoform(
                parse_order("hermite_gauss_p", p)?,
                parse_order("hermite_gauss_q", q)?,
                waist_px,
            ))
        }
        _ => return Err(invalid(expr)),
    };
    Ok(pattern)
}

/// Split `name(a, b, c)` into its name and trimmed arguments.
fn split_call(call: &str) -> Option<(&str, Vec<&str>)> {
    let (name, rest) = call.trim().split_once('(')?;
    let inner = rest.strip_suffix(')')?;
    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };
    Some((name.trim(), args))
}

fn parse_bool(name: &'static str, input: &str) -> Result<bool, GratingError> {
    input.parse().map_err(|_| GratingError::InvalidArgument {
        name,
        value: input.to_string(),
    })
}

fn parse_order(name: &'static str, input: &str) -> Result<u32, GratingError> {
    input.parse().map_err(|_| GratingError::InvalidArgument {
        name,
        value: input.to_string(),
    })
}

fn invalid(expr: &str) -> GratingError {
    GratingError::InvalidArgument {
        name: "pattern",
        value: expr.to_string(),
    }
}
