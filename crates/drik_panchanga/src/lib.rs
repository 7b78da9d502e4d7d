//! Calendar-unit engine for the Hindu luni-solar calendar.
//!
//! This crate provides:
//! - Generic unit-boundary determination with kshaya (skipped-unit)
//!   detection, from differential or absolute angle samples
//! - Tithi, nakshatra, yoga, and karana at sunrise, with end instants
//! - New/full-moon locators and lunar month (masa) classification with
//!   adhika detection, in both Amanta and Purnimanta systems
//!
//! All positions come from an injected [`drik_ephem::Ephemeris`]; every
//! computation here is stateless and pure.

pub mod boundary;
pub mod error;
pub mod month;
pub mod panchanga;

pub use boundary::{DayBoundary, UnitEnd, longitude_boundary, motion_boundary};
pub use error::PanchangaError;
pub use month::{
    MasaInfo, MonthSystem, RASHI_COUNT, RASHI_SEGMENT_DEG, masa, next_full_moon, next_new_moon,
    prev_full_moon, prev_new_moon, raasi, ritu,
};
pub use panchanga::{
    KARANA_COUNT, KARANA_SEGMENT_DEG, NAKSHATRA_COUNT, NAKSHATRA_SPAN_DEG, TITHI_COUNT,
    TITHI_SEGMENT_DEG, YOGA_COUNT, YOGA_SEGMENT_DEG, karana, lunar_phase, longitude_sum, nakshatra,
    nakshatra_pada, tithi, yoga,
};
