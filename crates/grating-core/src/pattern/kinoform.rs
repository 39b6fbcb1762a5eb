//! Hermite-Gauss kinoform pattern.
//!
//! A kinoform is a phase-only diffractive pattern. This one is the product
//! of two physicist's Hermite polynomials under a Gaussian envelope:
//! ```text
//! u(x, y) = H_p(√2·x / w) × H_q(√2·y / w) × exp(-(x² + y²) / w²)
//! ```
//! where `w` is the beam waist in pixels.
//!
//! # Reference
//! - Hermite-Gauss kinoforms, doi:10.1117/12.2187325

use std::f64::consts::SQRT_2;

use super::{Pattern, from_fn};

/// Physicist's Hermite polynomial `H_n(x)`.
///
/// Evaluated with the recurrence
/// `H_{n+1}(x) = 2x·H_n(x) - 2n·H_{n-1}(x)`, `H_0 = 1`, `H_1 = 2x`.
pub fn hermite(n: u32, x: f64) -> f64 {
    let mut prev = 1.0;
    if n == 0 {
        return prev;
    }
    let mut current = 2.0 * x;
    for k in 1..n {
        let next = 2.0 * x * current - 2.0 * f64::from(k) * prev;
        prev = current;
        current = next;
    }
    current
}

/// Hermite-Gauss kinoform of order `(p, q)` with beam waist `waist` pixels.
///
/// The pattern is centred on the origin; translate it with a
/// [`PatternTransformer`](super::PatternTransformer) to centre it on a
/// screen.
pub fn hermite_gauss_kinoform(p: u32, q: u32, waist: f64) -> impl Pattern + Clone {
    let prefactor = SQRT_2 / waist;
    let waist2 = waist * waist;
    from_fn(move |x, y| {
        hermite(p, prefactor * x) * hermite(q, prefactor * y) * (-(x * x + y * y) / waist2).exp()
    })
}
