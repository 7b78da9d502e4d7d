//! Angle normalization, unwrapping, and degree-minute-second conversion.
//!
//! Two normalized representations are used throughout the workspace:
//! [0, 360) for longitudes and elongations, [-180, 180) for signed
//! differences fed to root finders. `normalize_360(x)` equals
//! `normalize_360(normalize_180(x))` for all finite `x`.

use crate::error::MathError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Unwrap a sequence of angles sampled at increasing instants so that the
/// result is non-decreasing despite wraparound at 360.
///
/// Whenever an element is smaller than its (already unwrapped) predecessor,
/// 360 is added to it. A periodic quantity moving forward by less than one
/// full revolution between samples always unwraps cleanly; anything else
/// means the samples do not describe forward motion and interpolating them
/// would produce garbage, so that case fails with
/// [`MathError::NotMonotonic`].
pub fn unwrap_angles(angles: &[f64]) -> Result<Vec<f64>, MathError> {
    let mut result = angles.to_vec();
    for i in 1..result.len() {
        if result[i] < result[i - 1] {
            result[i] += 360.0;
        }
    }
    if result.windows(2).any(|w| w[0] > w[1]) {
        return Err(MathError::NotMonotonic(
            "angles moved backward by more than one revolution",
        ));
    }
    Ok(result)
}

/// Degrees, minutes, seconds of arc (or hours, minutes, seconds of time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (sign carries here for negative angles).
    pub degrees: i32,
    /// Whole minutes, 0..59.
    pub minutes: i32,
    /// Seconds with fraction.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees/minutes/seconds, keeping the
/// fractional seconds.
pub fn to_dms_precise(deg: f64) -> Dms {
    let d = deg.trunc();
    let mins = (deg - d) * 60.0;
    let m = mins.trunc();
    let s = (mins - m) * 60.0;
    Dms {
        degrees: d as i32,
        minutes: m as i32,
        seconds: s,
    }
}

/// Convert decimal degrees to degrees/minutes/seconds with seconds rounded
/// to the nearest whole second.
pub fn to_dms(deg: f64) -> Dms {
    let p = to_dms_precise(deg);
    Dms {
        seconds: p.seconds.round(),
        ..p
    }
}

/// Convert degrees/minutes/seconds to decimal degrees.
pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_360_basic() {
        assert!((normalize_360(0.0)).abs() < 1e-15);
        assert!((normalize_360(359.9) - 359.9).abs() < 1e-12);
        assert!((normalize_360(360.0)).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_180_basic() {
        assert!((normalize_180(179.0) - 179.0).abs() < 1e-12);
        assert!((normalize_180(180.0) + 180.0).abs() < 1e-12);
        assert!((normalize_180(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_180(-181.0) - 179.0).abs() < 1e-12);
    }

    #[test]
    fn normalizations_commute() {
        for deg in [-720.5, -180.0, -0.25, 0.0, 13.2, 180.0, 359.99, 1000.0] {
            let a = normalize_360(deg);
            let b = normalize_360(normalize_180(deg));
            assert!((a - b).abs() < 1e-9, "deg = {deg}: {a} vs {b}");
        }
    }

    #[test]
    fn unwrap_plain_sequence_unchanged() {
        let s = [10.0, 20.0, 30.0];
        assert_eq!(unwrap_angles(&s).unwrap(), s.to_vec());
    }

    #[test]
    fn unwrap_fixes_wraparound() {
        let s = [350.0, 355.0, 2.0, 8.0];
        let out = unwrap_angles(&s).unwrap();
        assert_eq!(out, vec![350.0, 355.0, 362.0, 368.0]);
    }

    #[test]
    fn unwrap_is_idempotent_on_sorted_output() {
        let s = [358.0, 1.0, 5.0];
        let once = unwrap_angles(&s).unwrap();
        let twice = unwrap_angles(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unwrap_rejects_backward_motion() {
        // Drops by more than a revolution's worth of shifting can fix.
        let s = [300.0, 100.0, 20.0];
        assert!(matches!(
            unwrap_angles(&s),
            Err(MathError::NotMonotonic(_))
        ));
    }

    #[test]
    fn dms_round_trip() {
        let d = to_dms_precise(from_dms(23.0, 30.0, 30.0));
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 30);
        assert!((d.seconds - 30.0).abs() < 1e-6);
    }

    #[test]
    fn dms_rounds_seconds() {
        let d = to_dms(16.405278); // 16:24:19
        assert_eq!(d.degrees, 16);
        assert_eq!(d.minutes, 24);
        assert!((d.seconds - 19.0).abs() < 1e-9);
    }
}
