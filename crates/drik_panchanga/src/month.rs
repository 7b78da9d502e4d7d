//! Lunar month (masa) determination, with new/full-moon locators and the
//! solar zodiac sign.
//!
//! A lunation is bracketed by locating the syzygies on either side of the
//! queried day: the elongation is sampled over a four-day window around a
//! tithi-derived estimate, unwrapped, and inverse-interpolated for the
//! instant it completes 360 (new moon) or reaches 180 (full moon)
//! degrees. The month is then named from the Sun's sidereal sign at the
//! bracketing syzygy; when the Sun stays in one sign across the whole
//! lunation the month is intercalary (adhika).

use drik_math::{inverse_lagrange, unwrap_angles};

use drik_ephem::{Ephemeris, Frame, Place};

use crate::error::PanchangaError;
use crate::panchanga::{TITHI_COUNT, lunar_phase, tithi};

/// Number of solar zodiac signs.
pub const RASHI_COUNT: u8 = 12;

/// Span of one sign: 30 degrees.
pub const RASHI_SEGMENT_DEG: f64 = 360.0 / RASHI_COUNT as f64;

/// Month-naming system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSystem {
    /// Month runs new moon to new moon (southern convention).
    Amanta,
    /// Month runs full moon to full moon (northern convention).
    Purnimanta,
}

/// Masa classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasaInfo {
    /// Lunar month, 1 = Chaitra .. 12 = Phalguna.
    pub masa: u8,
    /// Whether this is an adhika (intercalary) month.
    pub adhika: bool,
}

/// Half-day sample spacing over a +-2 day window: 17 samples.
const SYZYGY_SAMPLE_COUNT: usize = 17;

/// Locate the instant near `estimate_jd` at which the elongation reaches
/// `target_deg` (360 for new moon, 180 for full moon).
fn syzygy_near(
    eph: &dyn Ephemeris,
    estimate_jd: f64,
    target_deg: f64,
) -> Result<f64, PanchangaError> {
    let offsets: Vec<f64> = (0..SYZYGY_SAMPLE_COUNT)
        .map(|i| -2.0 + i as f64 / 4.0)
        .collect();
    let phases: Vec<f64> = offsets
        .iter()
        .map(|&x| lunar_phase(eph, estimate_jd + x))
        .collect();
    let unwrapped = unwrap_angles(&phases)?;
    let offset = inverse_lagrange(&offsets, &unwrapped, target_deg)?;
    Ok(estimate_jd + offset)
}

/// Previous new moon before `jd`, given the tithi (1..=30) at `jd`.
pub fn prev_new_moon(eph: &dyn Ephemeris, jd: f64, tithi_index: u8) -> Result<f64, PanchangaError> {
    syzygy_near(eph, jd - f64::from(tithi_index), 360.0)
}

/// Next new moon at or after `jd`, given the tithi (1..=30) at `jd`.
pub fn next_new_moon(eph: &dyn Ephemeris, jd: f64, tithi_index: u8) -> Result<f64, PanchangaError> {
    syzygy_near(eph, jd + f64::from(TITHI_COUNT - tithi_index), 360.0)
}

/// Previous full moon before `jd`, given the tithi (1..=30) at `jd`.
pub fn prev_full_moon(eph: &dyn Ephemeris, jd: f64, tithi_index: u8) -> Result<f64, PanchangaError> {
    let estimate = if tithi_index > 15 {
        jd - f64::from(tithi_index - 15)
    } else {
        jd - f64::from(tithi_index + 15)
    };
    syzygy_near(eph, estimate, 180.0)
}

/// Next full moon at or after `jd`, given the tithi (1..=30) at `jd`.
pub fn next_full_moon(eph: &dyn Ephemeris, jd: f64, tithi_index: u8) -> Result<f64, PanchangaError> {
    let estimate = if tithi_index < 15 {
        jd + f64::from(15 - tithi_index)
    } else {
        jd - f64::from(tithi_index) + 45.0
    };
    syzygy_near(eph, estimate, 180.0)
}

/// Solar zodiac sign at `jd`: 1 = Mesha .. 12 = Meena.
pub fn raasi(eph: &dyn Ephemeris, jd: f64, frame: Frame) -> u8 {
    let lon = eph.solar_longitude(jd, frame);
    let sign = (lon / RASHI_SEGMENT_DEG).ceil() as u8;
    if sign == 0 { 1 } else { sign }
}

/// Lunar month for the civil date containing `jd`, under the given
/// sidereal frame and month system.
///
/// The lunation containing the day's sunrise is bracketed by syzygies;
/// the masa follows the Sun's sign at the opening syzygy. If the Sun's
/// sign does not change across the lunation, the month is adhika.
pub fn masa(
    eph: &dyn Ephemeris,
    jd: f64,
    place: &Place,
    frame: Frame,
    system: MonthSystem,
) -> Result<MasaInfo, PanchangaError> {
    let ti = tithi(eph, jd, place)?.first.index;
    let rise = eph.sunrise(jd, place);

    let (last_syzygy, next_syzygy) = match system {
        MonthSystem::Amanta => (
            prev_new_moon(eph, rise, ti)?,
            next_new_moon(eph, rise, ti)?,
        ),
        MonthSystem::Purnimanta => (
            prev_full_moon(eph, rise, ti)?,
            next_full_moon(eph, rise, ti)?,
        ),
    };

    let this_sign = raasi(eph, last_syzygy, frame);
    let next_sign = raasi(eph, next_syzygy, frame);
    let adhika = this_sign == next_sign;

    let raw = match system {
        MonthSystem::Amanta => u16::from(this_sign) + 1,
        MonthSystem::Purnimanta => {
            // The dark half of Chaitra precedes Mesha sankranti.
            if this_sign == 10 && ti >= 15 {
                1
            } else {
                u16::from(this_sign) + 2
            }
        }
    };
    let masa = ((raw - 1) % u16::from(RASHI_COUNT) + 1) as u8;

    Ok(MasaInfo { masa, adhika })
}

/// Season for a masa: 0 = Vasanta .. 5 = Shishira, two months each.
pub fn ritu(masa: u8) -> u8 {
    (masa - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ritu_pairs_months() {
        assert_eq!(ritu(1), 0);
        assert_eq!(ritu(2), 0);
        assert_eq!(ritu(3), 1);
        assert_eq!(ritu(11), 5);
        assert_eq!(ritu(12), 5);
    }

    #[test]
    fn month_numbers_wrap() {
        // Sign 12 (Meena) at the opening new moon names amanta month 1.
        let raw = 12u16 + 1;
        assert_eq!(((raw - 1) % 12 + 1) as u8, 1);
    }
}
