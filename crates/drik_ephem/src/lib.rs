//! The ephemeris collaborator boundary.
//!
//! All planetary position computation, sidereal correction, and rise/set
//! geometry live behind the [`Ephemeris`] trait; the calendar and search
//! crates consume it as an injected capability and never compute a
//! position themselves. Implementations are expected to be pure: the same
//! instant always yields the same angle, and no call observes another.
//!
//! Instants are plain `f64` Julian day numbers in UT; the fractional part
//! is the time of day. All angles are degrees.

/// Geographic place for sunrise anchoring and local-time conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Offset of local civil time from UTC, in hours (e.g. +5.5 for IST).
    pub utc_offset_hours: f64,
}

impl Place {
    /// Create a new place.
    pub fn new(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        }
    }

    /// Local clock hours of `event_jd` counted from the civil date that
    /// begins at `day_jd` (a JD at 00:00 UT).
    ///
    /// Can exceed 24 when the event falls past local midnight; panchanga
    /// convention keeps such times on the starting date (e.g. "27:07").
    pub fn local_hours(&self, event_jd: f64, day_jd: f64) -> f64 {
        (event_jd - day_jd) * 24.0 + self.utc_offset_hours
    }
}

/// Sidereal zero-point convention.
///
/// Selects which ayanamsa offset an [`Ephemeris`] applies when asked for
/// sidereal longitudes. Always passed explicitly per call; there is no
/// process-global mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Ayanamsa {
    /// Chitrapaksha (Lahiri), the Indian civil standard.
    Lahiri,
    /// Fagan/Bradley (western sidereal).
    FaganBradley,
    /// B.V. Raman.
    Raman,
    /// K.S. Krishnamurti.
    Krishnamurti,
    /// True Chitra paksha: Spica held at exactly 180 degrees.
    TrueCitra,
    /// True Revati: zeta Piscium held at exactly 359 deg 50'.
    TrueRevati,
    /// User-defined: ayanamsa is zero at the given Julian day.
    User {
        /// Epoch at which the sidereal and tropical zodiacs coincide.
        zero_jd: f64,
    },
}

/// Longitude reference frame, threaded explicitly through every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Tropical (sayana) longitudes, measured from the equinox of date.
    Tropical,
    /// Sidereal (nirayana) longitudes under the given ayanamsa.
    Sidereal(Ayanamsa),
}

/// External ephemeris capability.
///
/// Consumed, never implemented, by this workspace (test suites supply
/// synthetic models). Every method is a pure function of its arguments.
pub trait Ephemeris {
    /// Sun's ecliptic longitude in degrees, normalized to [0, 360).
    fn solar_longitude(&self, jd: f64, frame: Frame) -> f64;

    /// Moon's ecliptic longitude in degrees, normalized to [0, 360).
    fn lunar_longitude(&self, jd: f64, frame: Frame) -> f64;

    /// Moon's ecliptic latitude in degrees, in [-90, 90]. Frame-independent
    /// to the precision the calendar needs; used for eclipse candidacy.
    fn lunar_latitude(&self, jd: f64) -> f64;

    /// Ayanamsa offset in degrees at `jd` under the given convention.
    fn ayanamsa(&self, jd: f64, ayanamsa: Ayanamsa) -> f64;

    /// Sunrise at `place` for the civil date containing `jd` (a JD at
    /// 00:00 UT of that date), returned as a JD instant in UT.
    ///
    /// Hindu sunrise is geometric, taken at the middle of the solar disc
    /// with no refraction; that choice belongs to the implementation.
    fn sunrise(&self, jd: f64, place: &Place) -> f64;
}
