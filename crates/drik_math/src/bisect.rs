//! Bisection root finder for scalar functions of a continuous instant.
//!
//! Shared by every "find the moment when X happens" computation: solstices,
//! sankrantis, ayanamsa zero points, and eclipse-window refinement all
//! bisect a sign change of some angular difference function.

use crate::error::MathError;

/// Default bracket tolerance for event searches, in days.
///
/// Roughly 43 microseconds. Tightening much past this stalls the bisection
/// against floating-point resolution at JD magnitudes.
pub const EVENT_TOLERANCE_DAYS: f64 = 5e-10;

/// Default bracket tolerance for broad epoch searches (multi-millennium
/// windows), in days. About 9 milliseconds.
pub const EPOCH_TOLERANCE_DAYS: f64 = 1e-7;

/// Iteration ceiling. A bracket of any astronomical width reaches any
/// representable tolerance in far fewer halvings; exceeding this means the
/// caller's tolerance is below machine epsilon for the bracket magnitude.
const MAX_ITERATIONS: u32 = 1000;

/// Locate an instant in `[start, stop]` where `f` crosses zero.
///
/// `f` must have opposite signs at `start` and `stop`; otherwise this fails
/// with [`MathError::NoBracket`] rather than returning a wrong instant.
/// Returns the midpoint of the final bracket once its width is at most
/// `tolerance`. Fails with [`MathError::NoConvergence`] if the ceiling of
/// 1000 halvings is reached first.
pub fn find_root(
    f: &mut dyn FnMut(f64) -> f64,
    start: f64,
    stop: f64,
    tolerance: f64,
) -> Result<f64, MathError> {
    let mut left = start;
    let mut right = stop;

    let f_left = f(left);
    let mut f_right = f(right);
    if f_left * f_right >= 0.0 {
        return Err(MathError::NoBracket(
            "function has the same sign at both endpoints",
        ));
    }

    for _ in 0..MAX_ITERATIONS {
        let middle = 0.5 * (left + right);
        let f_middle = f(middle);

        if f_middle * f_right >= 0.0 {
            right = middle;
            f_right = f_middle;
        } else {
            left = middle;
        }

        if (right - left).abs() <= tolerance {
            return Ok(0.5 * (left + right));
        }
    }

    Err(MathError::NoConvergence(
        "bisection bracket did not reach tolerance within 1000 iterations",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_linear_root() {
        let mut f = |x: f64| x - 3.25;
        let root = find_root(&mut f, 0.0, 10.0, 1e-12).unwrap();
        assert!((root - 3.25).abs() <= 1e-12);
    }

    #[test]
    fn finds_root_of_decreasing_function() {
        let mut f = |x: f64| 7.0 - x;
        let root = find_root(&mut f, 0.0, 100.0, 1e-10).unwrap();
        assert!((root - 7.0).abs() <= 1e-10);
    }

    #[test]
    fn finds_cosine_root() {
        let mut f = |x: f64| x.cos();
        let root = find_root(&mut f, 0.0, 3.0, 1e-12).unwrap();
        assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let mut f = |x: f64| x * x + 1.0;
        assert!(matches!(
            find_root(&mut f, -5.0, 5.0, 1e-9),
            Err(MathError::NoBracket(_))
        ));
    }

    #[test]
    fn rejects_zero_at_endpoint() {
        // Product of endpoint values is zero, which does not bracket.
        let mut f = |x: f64| x;
        assert!(matches!(
            find_root(&mut f, 0.0, 5.0, 1e-9),
            Err(MathError::NoBracket(_))
        ));
    }

    #[test]
    fn fails_when_tolerance_below_float_resolution() {
        // At JD-like magnitudes a 1e-30 tolerance can never be reached.
        let mut f = |x: f64| x - 2_456_310.7;
        assert!(matches!(
            find_root(&mut f, 2_456_300.0, 2_456_320.0, 1e-30),
            Err(MathError::NoConvergence(_))
        ));
    }

    #[test]
    fn root_accurate_at_event_tolerance() {
        let true_root = 2_456_310.123456;
        let mut f = |x: f64| (x - true_root) * 12.19; // deg/day slope
        let root = find_root(&mut f, 2_456_310.0, 2_456_311.0, EVENT_TOLERANCE_DAYS).unwrap();
        assert!((root - true_root).abs() <= EVENT_TOLERANCE_DAYS);
    }
}
