//! Golden-value integration tests for the event searches.
//!
//! A shared linear-motion sky makes every expected instant closed-form:
//! the Sun advances exactly 1 degree per day and the Moon 13, so sign
//! entries, solstices, and syzygies land on exact fractions of a day.

use drik_ephem::{Ayanamsa, Ephemeris, Frame, Place};
use drik_search::{
    Ayana, EclipseKind, SearchConfig, ayanamsa_zero_point, find_sankranti, next_eclipse,
    next_solstice, precession_rate_arcsec, prev_solstice, search_eclipses, search_sankrantis,
    vedic_month,
};

struct LinearSky {
    sun_at_zero: f64,
    moon_at_zero: f64,
    /// Epoch where the ayanamsa offset vanishes.
    ayanamsa_zero_jd: f64,
}

/// ~50.29 arcsec per Julian year, in degrees per day.
const PRECESSION_DEG_PER_DAY: f64 = 50.29 / 3600.0 / 365.25;

impl Ephemeris for LinearSky {
    fn solar_longitude(&self, jd: f64, _frame: Frame) -> f64 {
        (self.sun_at_zero + jd).rem_euclid(360.0)
    }
    fn lunar_longitude(&self, jd: f64, _frame: Frame) -> f64 {
        (self.moon_at_zero + 13.0 * jd).rem_euclid(360.0)
    }
    fn lunar_latitude(&self, jd: f64) -> f64 {
        5.0 * (360.0 * jd / 27.212221).to_radians().sin()
    }
    fn ayanamsa(&self, jd: f64, _ayanamsa: Ayanamsa) -> f64 {
        (jd - self.ayanamsa_zero_jd) * PRECESSION_DEG_PER_DAY
    }
    fn sunrise(&self, jd: f64, _place: &Place) -> f64 {
        jd.floor() + 0.25
    }
}

fn sky(sun_at_zero: f64, moon_at_zero: f64) -> LinearSky {
    LinearSky {
        sun_at_zero,
        moon_at_zero,
        ayanamsa_zero_jd: -600_000.0,
    }
}

const FRAME: Frame = Frame::Sidereal(Ayanamsa::Lahiri);

/// Twelve entries in one 360-day solar cycle, in zodiacal order, thirty
/// days apart.
#[test]
fn sankrantis_over_one_solar_cycle() {
    let eph = sky(265.5, 0.0);
    let events = search_sankrantis(&eph, 0.0, 360.0, FRAME, &SearchConfig::default()).unwrap();
    assert_eq!(events.len(), 12);
    let mut expected_rashi = 10u8;
    for (k, event) in events.iter().enumerate() {
        assert_eq!(event.rashi, expected_rashi);
        let expected_jd = 4.5 + 30.0 * k as f64;
        assert!(
            (event.jd - expected_jd).abs() < 1e-6,
            "entry {k}: got {}",
            event.jd
        );
        expected_rashi = expected_rashi % 12 + 1;
    }
}

/// A windowed bisection and the directional scan agree on the same
/// entry.
#[test]
fn windowed_and_scanned_entry_agree() {
    let eph = sky(265.5, 0.0);
    let windowed = find_sankranti(&eph, 10, 0.25, 29.25, FRAME).unwrap();
    let events = search_sankrantis(&eph, 0.0, 29.0, FRAME, &SearchConfig::default()).unwrap();
    assert_eq!(events.len(), 1);
    assert!((windowed - events[0].jd).abs() < 1e-6);
}

/// Solstices recur after one full cycle of this Sun.
#[test]
fn solstice_cycle_closes() {
    let eph = sky(280.5, 0.0);
    let prev = prev_solstice(&eph, 0.0, Ayana::Uttarayana).unwrap().unwrap();
    assert!((prev + 10.5).abs() < 1e-6);
    let next = next_solstice(&eph, prev + 1.0, Ayana::Uttarayana)
        .unwrap()
        .unwrap();
    assert!((next - prev - 360.0).abs() < 1e-6);
    // The opposite solstice sits half a cycle away.
    let summer = next_solstice(&eph, prev + 1.0, Ayana::Dakshinayana)
        .unwrap()
        .unwrap();
    assert!((summer - prev - 180.0).abs() < 1e-6);
}

/// A lunation that began before the winter solstice still counts as the
/// twelfth month.
#[test]
fn vedic_month_straddling_lunation_is_twelfth() {
    // Solstice at t = -10.5; the lunation containing t = 0 began at
    // t = -11.0.
    let eph = sky(280.5, 52.5);
    let place = Place::new(12.972, 77.594, 5.5);
    let month = vedic_month(&eph, 0.0, &place).unwrap();
    assert_eq!(month, 12);
}

/// Zero point recovered over the classical -1000 CE .. 1000 CE window,
/// and the drift rate matches the model.
#[test]
fn ayanamsa_epoch_and_rate() {
    let eph = LinearSky {
        sun_at_zero: 0.0,
        moon_at_zero: 0.0,
        ayanamsa_zero_jd: 1_825_235.5,
    };
    let zero = ayanamsa_zero_point(&eph, Ayanamsa::Lahiri, 1_355_807.5, 2_086_307.5).unwrap();
    assert!((zero - 1_825_235.5).abs() < 1e-6);
    let rate = precession_rate_arcsec(&eph, Ayanamsa::Lahiri);
    assert!((rate - 50.29).abs() < 1e-9);
}

/// Eclipse candidates are syzygies near a node; the search returns them
/// in order and `next_eclipse` heads the sequence.
#[test]
fn eclipse_candidates_ordered_and_consistent() {
    let eph = sky(0.0, 350.0);
    let events = search_eclipses(&eph, 0.0, EclipseKind::Solar).unwrap();
    assert!(!events.is_empty());
    for pair in events.windows(2) {
        assert!(pair[1].jd > pair[0].jd);
    }
    for event in &events {
        assert!(event.lunar_latitude_deg.abs() <= 2.0);
        // The event really is a new moon of this sky.
        let elongation = (350.0 + 12.0 * event.jd).rem_euclid(360.0);
        assert!(elongation < 1e-6 || elongation > 360.0 - 1e-6);
    }
    let first = next_eclipse(&eph, 0.0, EclipseKind::Solar).unwrap();
    assert_eq!(first, events.first().copied());
}
