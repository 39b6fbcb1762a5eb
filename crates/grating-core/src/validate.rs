//! Argument validation shared by constructors and parsers.

use crate::error::GratingError;

/// Check that a grating or blaze dimension is a positive integer.
pub fn ensure_positive(value: u32, name: &'static str) -> Result<u32, GratingError> {
    if value == 0 {
        return Err(GratingError::InvalidDimension {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Parse a dimension from user input.
///
/// Accepts only positive base-10 integers that fit in a `u32`. Negative,
/// fractional and non-finite inputs are rejected with
/// [`GratingError::InvalidDimension`] naming the offending value.
pub fn parse_dimension(name: &'static str, input: &str) -> Result<u32, GratingError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<u32>()
        .map_err(|_| GratingError::InvalidDimension {
            name,
            value: trimmed.to_string(),
        })?;
    ensure_positive(value, name)
}

/// Parse a real-valued argument, rejecting NaN and infinities.
pub fn parse_finite(name: &'static str, input: &str) -> Result<f64, GratingError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GratingError::InvalidArgument {
            name,
            value: trimmed.to_string(),
        }),
    }
}

/// Byte length of an RGBA buffer of the given size, or `None` on overflow.
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_accepts_positive_integers() {
        assert_eq!(parse_dimension("width", "256"), Ok(256));
        assert_eq!(parse_dimension("width", " 12 "), Ok(12));
    }

    #[test]
    fn test_parse_dimension_rejects_bad_input() {
        for input in ["0", "-3", "1.5", "NaN", "inf", "", "wide"] {
            let err = parse_dimension("height", input).unwrap_err();
            assert!(
                matches!(err, GratingError::InvalidDimension { name: "height", .. }),
                "input {input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_finite_rejects_nan() {
        assert!(parse_finite("tilt", "NaN").is_err());
        assert_eq!(parse_finite("tilt", "0.5"), Ok(0.5));
    }

    #[test]
    fn test_rgba_len() {
        assert_eq!(rgba_len(3, 2), Some(24));
        assert_eq!(rgba_len(0, 5), Some(0));
    }
}
