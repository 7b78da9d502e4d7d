//! Calendar-unit boundary determination with kshaya (skipped-unit)
//! detection.
//!
//! Every periodic calendar quantity partitions an angular measure into
//! equal units: 30 tithis of 12 deg of elongation, 27 nakshatras of
//! 13 deg 20' of lunar longitude, 27 yogas of 13 deg 20' of the
//! longitude sum, 60 karanas of 6 deg. Given the measure at sunrise, the
//! algorithms here determine which unit the day starts in and the sub-day
//! instant at which it ends, by sampling the measure across the following
//! day and inverting the motion with Lagrange interpolation.
//!
//! A unit whose entire span elapses between two sunrises never anchors a
//! civil day and is "skipped"; both flavors detect this by re-deriving the
//! unit index one day later and, when it advanced by two, solve a second
//! time for the skipped unit's own end.

use drik_math::{inverse_lagrange, normalize_360, unwrap_angles};

use crate::error::PanchangaError;

/// Fractional-day offsets for differential motion sampling.
const MOTION_OFFSETS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Fractional-day offsets for absolute longitude sampling.
const LONGITUDE_OFFSETS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// One calendar unit together with its ending instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEnd {
    /// 1-based unit index (1..=total for the quantity).
    pub index: u8,
    /// JD (UT) at which the unit ends.
    pub ends_jd: f64,
}

/// Result of a day's boundary determination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayBoundary {
    /// The unit in effect at the anchor instant.
    pub first: UnitEnd,
    /// A second unit that begins and ends before the next anchor, when one
    /// is skipped. Its index wraps past the unit count back to 1.
    pub leaped: Option<UnitEnd>,
}

/// 1-based unit index for a measure value, given the unit span in degrees.
///
/// A measure of exactly 0 counts as the start of unit 1.
fn unit_of(measure: f64, span: f64) -> u8 {
    let unit = (measure / span).ceil() as u8;
    if unit == 0 { 1 } else { unit }
}

/// Index of the unit after `index`, wrapping past `total_units` to 1.
fn next_unit(index: u8, total_units: u8) -> u8 {
    if index >= total_units { 1 } else { index + 1 }
}

/// Verify the one-skip-per-day assumption.
///
/// `advance` is the unit-index advance over one day, modulo the unit
/// count. 0 or 1 means no skip, 2 means exactly one skipped unit; more
/// would require two whole units to elapse within 24 hours, which no
/// covered quantity's motion permits.
fn check_advance(advance: u8) -> Result<bool, PanchangaError> {
    match advance {
        0 | 1 => Ok(false),
        2 => Ok(true),
        _ => Err(PanchangaError::DoubleLeap(
            "unit index advanced by more than two in one day",
        )),
    }
}

/// Boundary determination from differential motion samples.
///
/// `measure` must return the quantity normalized to [0, 360). The measure
/// is sampled at four quarter-day offsets past `anchor_jd`; each sample is
/// the cumulative degrees traveled since the anchor, wrapped per-sample
/// into [0, 360) (the day's total motion stays well under a revolution).
/// Inverse interpolation against the degrees left in the current unit
/// yields the end offset.
///
/// Used by tithi, karana, and yoga, whose measures are derived angle
/// combinations with no meaningful absolute unwrap.
pub fn motion_boundary(
    measure: &dyn Fn(f64) -> f64,
    anchor_jd: f64,
    total_units: u8,
) -> Result<DayBoundary, PanchangaError> {
    let span = 360.0 / total_units as f64;
    let at_anchor = measure(anchor_jd);
    let today = unit_of(at_anchor, span);
    let degrees_left = today as f64 * span - at_anchor;

    let motion: Vec<f64> = MOTION_OFFSETS
        .iter()
        .map(|&t| normalize_360(measure(anchor_jd + t) - at_anchor))
        .collect();

    let end_offset = inverse_lagrange(&MOTION_OFFSETS, &motion, degrees_left)?;
    let first = UnitEnd {
        index: today,
        ends_jd: anchor_jd + end_offset,
    };

    let tomorrow = unit_of(measure(anchor_jd + 1.0), span);
    let advance = (i32::from(tomorrow) - i32::from(today)).rem_euclid(i32::from(total_units)) as u8;
    let leaped = if check_advance(advance)? {
        // Solve again with the same samples for the skipped unit's end.
        let leap_degrees_left = (today as f64 + 1.0) * span - at_anchor;
        let leap_offset = inverse_lagrange(&MOTION_OFFSETS, &motion, leap_degrees_left)?;
        Some(UnitEnd {
            index: next_unit(today, total_units),
            ends_jd: anchor_jd + leap_offset,
        })
    } else {
        None
    };

    Ok(DayBoundary { first, leaped })
}

/// Boundary determination from absolute longitude samples.
///
/// `longitude` must return an angle normalized to [0, 360). Five samples
/// spanning one day from `anchor_jd` are unwrapped to restore monotonicity
/// across the 360-degree seam, then inverse-interpolated against the
/// current unit's upper boundary (which may exceed 360 in unwrapped
/// coordinates for the final unit).
///
/// Used by nakshatra, whose measure is the Moon's longitude itself.
pub fn longitude_boundary(
    longitude: &dyn Fn(f64) -> f64,
    anchor_jd: f64,
    total_units: u8,
) -> Result<DayBoundary, PanchangaError> {
    let span = 360.0 / total_units as f64;
    let samples: Vec<f64> = LONGITUDE_OFFSETS
        .iter()
        .map(|&t| longitude(anchor_jd + t))
        .collect();

    let today = unit_of(samples[0], span);
    let unwrapped = unwrap_angles(&samples)?;

    let end_offset = inverse_lagrange(&LONGITUDE_OFFSETS, &unwrapped, today as f64 * span)?;
    let first = UnitEnd {
        index: today,
        ends_jd: anchor_jd + end_offset,
    };

    let tomorrow = unit_of(samples[4], span);
    let advance = (i32::from(tomorrow) - i32::from(today)).rem_euclid(i32::from(total_units)) as u8;
    let leaped = if check_advance(advance)? {
        let leap_target = (today as f64 + 1.0) * span;
        let leap_offset = inverse_lagrange(&LONGITUDE_OFFSETS, &unwrapped, leap_target)?;
        Some(UnitEnd {
            index: next_unit(today, total_units),
            ends_jd: anchor_jd + leap_offset,
        })
    } else {
        None
    };

    Ok(DayBoundary { first, leaped })
}
