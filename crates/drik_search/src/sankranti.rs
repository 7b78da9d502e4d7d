//! Sankranti search: instants when the Sun enters a zodiac sign.
//!
//! A sign entry is the zero of `normalize_180(solar_longitude - boundary)`
//! where the boundary is the 30-degree multiple opening the sign. The Sun
//! moves about one degree per day, so a one-day scan step brackets every
//! entry.

use drik_ephem::{Ephemeris, Frame};
use drik_math::{EVENT_TOLERANCE_DAYS, find_root, normalize_180};
use drik_panchanga::{RASHI_COUNT, RASHI_SEGMENT_DEG, raasi};

use crate::error::SearchError;
use crate::scan::{SearchConfig, SearchDirection, find_crossing};

/// A sign-entry event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SankrantiEvent {
    /// Instant of entry as a JD in UT.
    pub jd: f64,
    /// Sign entered, 1 = Mesha .. 12 = Meena.
    pub rashi: u8,
}

/// Longitude at which the given sign begins.
fn entry_longitude_deg(rashi: u8) -> f64 {
    f64::from(rashi - 1) * RASHI_SEGMENT_DEG
}

fn check_rashi(rashi: u8) -> Result<(), SearchError> {
    if (1..=RASHI_COUNT).contains(&rashi) {
        Ok(())
    } else {
        Err(SearchError::InvalidWindow("rashi must be 1..=12"))
    }
}

/// Locate the entry into `rashi` inside a caller-supplied window by
/// direct bisection.
///
/// The window must bracket exactly one entry into the sign (a season-
/// length window around the expected date); a window with no crossing
/// fails with the underlying `NoBracket` error.
pub fn find_sankranti(
    eph: &dyn Ephemeris,
    rashi: u8,
    jd_start: f64,
    jd_stop: f64,
    frame: Frame,
) -> Result<f64, SearchError> {
    check_rashi(rashi)?;
    if jd_stop <= jd_start {
        return Err(SearchError::InvalidWindow("jd_stop must be after jd_start"));
    }
    let target = entry_longitude_deg(rashi);
    let mut f = |jd: f64| normalize_180(eph.solar_longitude(jd, frame) - target);
    Ok(find_root(&mut f, jd_start, jd_stop, EVENT_TOLERANCE_DAYS)?)
}

/// Next entry into `rashi` at or after `jd`. `Ok(None)` when the scan
/// range is exhausted first.
pub fn next_specific_sankranti(
    eph: &dyn Ephemeris,
    rashi: u8,
    jd: f64,
    frame: Frame,
    config: &SearchConfig,
) -> Result<Option<SankrantiEvent>, SearchError> {
    check_rashi(rashi)?;
    let target = entry_longitude_deg(rashi);
    let mut f = |t: f64| normalize_180(eph.solar_longitude(t, frame) - target);
    let found = find_crossing(&mut f, jd, SearchDirection::Forward, config)?;
    Ok(found.map(|jd| SankrantiEvent { jd, rashi }))
}

/// Previous entry into `rashi` at or before `jd`.
pub fn prev_specific_sankranti(
    eph: &dyn Ephemeris,
    rashi: u8,
    jd: f64,
    frame: Frame,
    config: &SearchConfig,
) -> Result<Option<SankrantiEvent>, SearchError> {
    check_rashi(rashi)?;
    let target = entry_longitude_deg(rashi);
    let mut f = |t: f64| normalize_180(eph.solar_longitude(t, frame) - target);
    let found = find_crossing(&mut f, jd, SearchDirection::Backward, config)?;
    Ok(found.map(|jd| SankrantiEvent { jd, rashi }))
}

/// Next sankranti of any kind after `jd`: the entry into the sign
/// following the one the Sun currently occupies.
pub fn next_sankranti(
    eph: &dyn Ephemeris,
    jd: f64,
    frame: Frame,
    config: &SearchConfig,
) -> Result<Option<SankrantiEvent>, SearchError> {
    let current = raasi(eph, jd, frame);
    let rashi = current % RASHI_COUNT + 1;
    next_specific_sankranti(eph, rashi, jd, frame, config)
}

/// Previous sankranti before `jd`: the entry into the sign the Sun
/// currently occupies.
pub fn prev_sankranti(
    eph: &dyn Ephemeris,
    jd: f64,
    frame: Frame,
    config: &SearchConfig,
) -> Result<Option<SankrantiEvent>, SearchError> {
    let rashi = raasi(eph, jd, frame);
    prev_specific_sankranti(eph, rashi, jd, frame, config)
}

/// Enumerate every sign entry in `[jd_start, jd_end]` in order.
///
/// The scan samples the occupied sign at each step; the step must be
/// short enough that the Sun cannot traverse a whole sign between
/// samples (the default one-day step leaves a ~29-day margin).
pub fn search_sankrantis(
    eph: &dyn Ephemeris,
    jd_start: f64,
    jd_end: f64,
    frame: Frame,
    config: &SearchConfig,
) -> Result<Vec<SankrantiEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidWindow)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidWindow("jd_end must be after jd_start"));
    }

    let mut events = Vec::new();
    let mut t_prev = jd_start;
    let mut r_prev = raasi(eph, t_prev, frame);

    loop {
        let t_curr = (t_prev + config.step_days).min(jd_end);
        let r_curr = raasi(eph, t_curr, frame);

        if r_curr != r_prev {
            if r_curr != r_prev % RASHI_COUNT + 1 {
                return Err(SearchError::InvalidWindow(
                    "scan step too coarse: more than one sign entry between samples",
                ));
            }
            let target = entry_longitude_deg(r_curr);
            let mut f = |t: f64| normalize_180(eph.solar_longitude(t, frame) - target);
            let jd = find_root(&mut f, t_prev, t_curr, config.tolerance_days)?;
            events.push(SankrantiEvent { jd, rashi: r_curr });
        }

        if t_curr >= jd_end {
            break;
        }
        t_prev = t_curr;
        r_prev = r_curr;
    }

    Ok(events)
}
