//! Eclipse candidate search.
//!
//! Enumerates syzygies (new moons for solar, full moons for lunar
//! eclipses) forward from a starting instant and keeps those where the
//! Moon is close enough to the ecliptic for an eclipse to occur. The
//! latitude filter is generous; shadow-geometry classification is the
//! ephemeris provider's concern, not this crate's.

use drik_ephem::{Ephemeris, Frame};
use drik_math::{EVENT_TOLERANCE_DAYS, find_root, normalize_180};

use crate::error::SearchError;
use crate::scan::is_genuine_crossing;

/// Hard cap on elapsed scan range. A search that finds nothing within
/// this span terminates with the events found so far rather than scan
/// forever.
pub const EVENT_LIMIT_DAYS: f64 = 2000.0;

/// Ecliptic latitude threshold for eclipse candidacy (degrees).
const ECLIPSE_LAT_THRESHOLD_DEG: f64 = 2.0;

/// Step size for the syzygy scan (days). The synodic period is ~29.5
/// days, so half a day safely brackets every crossing.
const SYZYGY_STEP_DAYS: f64 = 0.5;

/// Eclipse family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EclipseKind {
    /// At new moon (conjunction).
    Solar,
    /// At full moon (opposition).
    Lunar,
}

impl EclipseKind {
    /// Sun-Moon elongation at the relevant syzygy.
    fn syzygy_elongation_deg(self) -> f64 {
        match self {
            EclipseKind::Solar => 0.0,
            EclipseKind::Lunar => 180.0,
        }
    }
}

/// An eclipse candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseEvent {
    pub kind: EclipseKind,
    /// Syzygy instant as a JD in UT.
    pub jd: f64,
    /// Moon's ecliptic latitude at the syzygy, degrees.
    pub lunar_latitude_deg: f64,
}

/// Enumerate eclipse candidates of the given kind from `jd_start`
/// forward, up to the elapsed cap.
///
/// A span containing no candidate yields an empty vector, not an error.
pub fn search_eclipses(
    eph: &dyn Ephemeris,
    jd_start: f64,
    kind: EclipseKind,
) -> Result<Vec<EclipseEvent>, SearchError> {
    let target = kind.syzygy_elongation_deg();
    let mut f = |jd: f64| {
        normalize_180(
            eph.lunar_longitude(jd, Frame::Tropical) - eph.solar_longitude(jd, Frame::Tropical)
                - target,
        )
    };

    let mut events = Vec::new();
    let mut t_prev = jd_start;
    let mut f_prev = f(t_prev);

    loop {
        let t_curr = t_prev + SYZYGY_STEP_DAYS;
        if t_curr - jd_start > EVENT_LIMIT_DAYS {
            break;
        }
        let f_curr = f(t_curr);

        if is_genuine_crossing(f_prev, f_curr) {
            let jd = find_root(&mut f, t_prev, t_curr, EVENT_TOLERANCE_DAYS)?;
            let lat = eph.lunar_latitude(jd);
            if lat.abs() <= ECLIPSE_LAT_THRESHOLD_DEG {
                events.push(EclipseEvent {
                    kind,
                    jd,
                    lunar_latitude_deg: lat,
                });
            }
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(events)
}

/// First eclipse candidate of the given kind at or after `jd`, within
/// the elapsed cap.
pub fn next_eclipse(
    eph: &dyn Ephemeris,
    jd: f64,
    kind: EclipseKind,
) -> Result<Option<EclipseEvent>, SearchError> {
    let target = kind.syzygy_elongation_deg();
    let mut f = |t: f64| {
        normalize_180(
            eph.lunar_longitude(t, Frame::Tropical) - eph.solar_longitude(t, Frame::Tropical)
                - target,
        )
    };

    let mut t_prev = jd;
    let mut f_prev = f(t_prev);

    loop {
        let t_curr = t_prev + SYZYGY_STEP_DAYS;
        if t_curr - jd > EVENT_LIMIT_DAYS {
            return Ok(None);
        }
        let f_curr = f(t_curr);

        if is_genuine_crossing(f_prev, f_curr) {
            let root = find_root(&mut f, t_prev, t_curr, EVENT_TOLERANCE_DAYS)?;
            let lat = eph.lunar_latitude(root);
            if lat.abs() <= ECLIPSE_LAT_THRESHOLD_DEG {
                return Ok(Some(EclipseEvent {
                    kind,
                    jd: root,
                    lunar_latitude_deg: lat,
                }));
            }
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }
}
