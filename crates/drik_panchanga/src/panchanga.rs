//! Daily panchanga elements: tithi, nakshatra, yoga, and karana.
//!
//! Each element is a specialization of the boundary algorithms in
//! [`crate::boundary`] over a different angular measure, anchored at the
//! provider's sunrise for the queried civil date. All results carry JD
//! instants; local-time presentation is the caller's concern.

use drik_math::normalize_360;

use drik_ephem::{Ephemeris, Frame, Place};

use crate::boundary::{DayBoundary, longitude_boundary, motion_boundary};
use crate::error::PanchangaError;

/// Number of tithis in a synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Elongation span of one tithi: 360/30 = 12 degrees.
pub const TITHI_SEGMENT_DEG: f64 = 360.0 / TITHI_COUNT as f64;

/// Number of karanas in a synodic month (two per tithi).
pub const KARANA_COUNT: u8 = 60;

/// Elongation span of one karana: 6 degrees.
pub const KARANA_SEGMENT_DEG: f64 = 360.0 / KARANA_COUNT as f64;

/// Number of yogas.
pub const YOGA_COUNT: u8 = 27;

/// Span of one yoga on the longitude sum: 13 deg 20'.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / YOGA_COUNT as f64;

/// Number of nakshatras in the 27-fold scheme.
pub const NAKSHATRA_COUNT: u8 = 27;

/// Span of one nakshatra: 360/27 = 13 deg 20'.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / NAKSHATRA_COUNT as f64;

/// Moon-Sun elongation in degrees [0, 360) at `jd`.
///
/// The ayanamsa cancels in the difference, so tropical longitudes suffice
/// regardless of the sidereal convention in use.
pub fn lunar_phase(eph: &dyn Ephemeris, jd: f64) -> f64 {
    normalize_360(
        eph.lunar_longitude(jd, Frame::Tropical) - eph.solar_longitude(jd, Frame::Tropical),
    )
}

/// Sum of lunar and solar longitudes in degrees [0, 360) at `jd`.
///
/// Unlike the elongation, the ayanamsa does not cancel in the sum, so the
/// frame matters and must be supplied.
pub fn longitude_sum(eph: &dyn Ephemeris, jd: f64, frame: Frame) -> f64 {
    normalize_360(eph.lunar_longitude(jd, frame) + eph.solar_longitude(jd, frame))
}

/// Tithi at sunrise for the civil date containing `jd` (a JD at 00:00 UT),
/// with its end instant, and the skipped tithi's end when one is skipped.
///
/// Tithi 1..=30 counts 12-degree steps of elongation from the last new
/// moon; it does not depend on the ayanamsa.
pub fn tithi(
    eph: &dyn Ephemeris,
    jd: f64,
    place: &Place,
) -> Result<DayBoundary, PanchangaError> {
    let rise = eph.sunrise(jd, place);
    let measure = |t: f64| lunar_phase(eph, t);
    motion_boundary(&measure, rise, TITHI_COUNT)
}

/// Karana (half-tithi, 1..=60) at sunrise with its end instant.
pub fn karana(
    eph: &dyn Ephemeris,
    jd: f64,
    place: &Place,
) -> Result<DayBoundary, PanchangaError> {
    let rise = eph.sunrise(jd, place);
    let measure = |t: f64| lunar_phase(eph, t);
    motion_boundary(&measure, rise, KARANA_COUNT)
}

/// Yoga (1..=27) at sunrise with its end instant.
///
/// Pass `Frame::Sidereal(..)` for the conventional nirayana yoga or
/// `Frame::Tropical` for the tropical variant.
pub fn yoga(
    eph: &dyn Ephemeris,
    jd: f64,
    place: &Place,
    frame: Frame,
) -> Result<DayBoundary, PanchangaError> {
    let rise = eph.sunrise(jd, place);
    let measure = |t: f64| longitude_sum(eph, t, frame);
    motion_boundary(&measure, rise, YOGA_COUNT)
}

/// Nakshatra (1 = Ashwini .. 27 = Revati) at sunrise with its end instant.
pub fn nakshatra(
    eph: &dyn Ephemeris,
    jd: f64,
    place: &Place,
    frame: Frame,
) -> Result<DayBoundary, PanchangaError> {
    let rise = eph.sunrise(jd, place);
    let longitude = |t: f64| eph.lunar_longitude(t, frame);
    longitude_boundary(&longitude, rise, NAKSHATRA_COUNT)
}

/// Nakshatra (1..=27) and pada (1..=4) containing a longitude.
///
/// Each nakshatra divides into four padas of 3 deg 20', 108 padas in all.
pub fn nakshatra_pada(longitude_deg: f64) -> (u8, u8) {
    let one_pada = NAKSHATRA_SPAN_DEG / 4.0;
    let nak = (longitude_deg / NAKSHATRA_SPAN_DEG) as u8;
    let remainder = longitude_deg - nak as f64 * NAKSHATRA_SPAN_DEG;
    let pada = (remainder / one_pada) as u8;
    (nak + 1, pada + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_sizes() {
        assert!((TITHI_SEGMENT_DEG - 12.0).abs() < 1e-12);
        assert!((KARANA_SEGMENT_DEG - 6.0).abs() < 1e-12);
        assert!((YOGA_SEGMENT_DEG - NAKSHATRA_SPAN_DEG).abs() < 1e-12);
        assert!((NAKSHATRA_SPAN_DEG - (13.0 + 20.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn pada_of_first_degree() {
        assert_eq!(nakshatra_pada(0.5), (1, 1));
    }

    #[test]
    fn pada_of_revati_end() {
        let (nak, pada) = nakshatra_pada(359.9);
        assert_eq!(nak, 27);
        assert_eq!(pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        // 3 deg 20' into Ashwini starts pada 2
        assert_eq!(nakshatra_pada(3.34), (1, 2));
        // Start of Bharani
        assert_eq!(nakshatra_pada(13.34), (2, 1));
    }
}
