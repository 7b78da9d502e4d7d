//! Inverse Lagrange interpolation.
//!
//! Given sample pairs (offset, value), estimates the offset at which the
//! value function reaches a target. This is how sub-day unit boundaries are
//! refined: the boundary algorithms sample angular motion at a handful of
//! fractional-day offsets past sunrise and invert for the offset where the
//! motion equals the degrees still to travel.

use crate::error::MathError;

/// Estimate the offset `x*` such that the polynomial through `(offsets[i],
/// values[i])` satisfies `p(x*) = target`.
///
/// Standard Lagrange inverse interpolation with the roles of x and y
/// swapped: basis polynomials are formed over `values` and evaluated at
/// `target`, weighting `offsets`. O(n^2) in the sample count. Callers use
/// n = 4 (boundary end-time refinement), n = 5 (nakshatra), or n = 17
/// (new/full-moon search).
///
/// The values must be pairwise distinct — equal values make a basis
/// denominator zero — and both slices must be the same non-zero length;
/// violations fail with [`MathError::DegenerateSamples`].
pub fn inverse_lagrange(offsets: &[f64], values: &[f64], target: f64) -> Result<f64, MathError> {
    if offsets.len() != values.len() {
        return Err(MathError::DegenerateSamples(
            "offsets and values differ in length",
        ));
    }
    if offsets.is_empty() {
        return Err(MathError::DegenerateSamples("no samples supplied"));
    }

    let mut total = 0.0;
    for i in 0..offsets.len() {
        let mut numer = 1.0;
        let mut denom = 1.0;
        for j in 0..offsets.len() {
            if j != i {
                if values[i] == values[j] {
                    return Err(MathError::DegenerateSamples(
                        "two samples share the same value",
                    ));
                }
                numer *= target - values[j];
                denom *= values[i] - values[j];
            }
        }
        total += numer * offsets[i] / denom;
    }

    Ok(total)
}
