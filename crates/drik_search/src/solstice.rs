//! Solstice search and the tropical ("vedic") lunar month count.
//!
//! Solstices are zeros of `normalize_180(tropical_longitude - target)`
//! with target 90 (dakshinayana) or 270 (uttarayana). Always tropical;
//! the ayana turning points are defined by the equinox of date, not the
//! sidereal zodiac.

use drik_ephem::{Ephemeris, Frame, Place};
use drik_math::normalize_180;
use drik_panchanga::{next_new_moon, prev_new_moon, tithi};

use crate::error::SearchError;
use crate::scan::{SearchConfig, SearchDirection, find_crossing};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530589;

/// Half-year ayana, named by the direction of the Sun's travel after the
/// turning point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ayana {
    /// Northward travel; begins at the winter solstice (270 deg).
    Uttarayana,
    /// Southward travel; begins at the summer solstice (90 deg).
    Dakshinayana,
}

impl Ayana {
    /// Tropical solar longitude at the ayana's opening solstice.
    pub fn solstice_longitude_deg(self) -> f64 {
        match self {
            Ayana::Uttarayana => 270.0,
            Ayana::Dakshinayana => 90.0,
        }
    }
}

fn solstice_config() -> SearchConfig {
    // A year-long backward scan plus a short forward allowance, as the
    // turning point may fall just after the query date.
    SearchConfig {
        max_scan_days: 430.0,
        ..SearchConfig::default()
    }
}

/// Most recent solstice opening the given ayana at or before `jd`
/// (allowing a ~25-day forward slack for a turning point just past the
/// query date).
pub fn prev_solstice(
    eph: &dyn Ephemeris,
    jd: f64,
    ayana: Ayana,
) -> Result<Option<f64>, SearchError> {
    let target = ayana.solstice_longitude_deg();
    let mut f = |t: f64| normalize_180(eph.solar_longitude(t, Frame::Tropical) - target);
    find_crossing(
        &mut f,
        jd + 25.0,
        SearchDirection::Backward,
        &solstice_config(),
    )
}

/// Next solstice opening the given ayana at or after `jd`.
pub fn next_solstice(
    eph: &dyn Ephemeris,
    jd: f64,
    ayana: Ayana,
) -> Result<Option<f64>, SearchError> {
    let target = ayana.solstice_longitude_deg();
    let mut f = |t: f64| normalize_180(eph.solar_longitude(t, Frame::Tropical) - target);
    find_crossing(&mut f, jd, SearchDirection::Forward, &solstice_config())
}

/// Tropical lunar month number for the civil date containing `jd`:
/// lunations counted from the most recent winter solstice.
///
/// The lunation straddling the solstice still belongs to the old cycle
/// and counts as the twelfth month.
pub fn vedic_month(eph: &dyn Ephemeris, jd: f64, place: &Place) -> Result<u8, SearchError> {
    let uttarayana = prev_solstice(eph, jd, Ayana::Uttarayana)?.ok_or(
        SearchError::InvalidWindow("no winter solstice within the scan range before jd"),
    )?;

    let mut month = ((jd - uttarayana).abs() / SYNODIC_MONTH_DAYS).ceil() as u8;

    let ti = tithi(eph, jd, place)?.first.index;
    let rise = eph.sunrise(jd, place);
    if jd >= uttarayana {
        let lunation_start = prev_new_moon(eph, rise, ti)?;
        if lunation_start < uttarayana {
            month = 12;
        }
    } else {
        // Query date in the forward-slack zone just before the solstice.
        let lunation_end = next_new_moon(eph, rise, ti)?;
        if lunation_end > uttarayana {
            month = 12;
        }
    }

    Ok(month)
}
