//! Periodic event search: sankrantis, solstices, ayanamsa epochs, and
//! eclipse candidates.
//!
//! This crate provides:
//! - A generic coarse-scan + bisection driver over sign-changing
//!   functions of time, with a wrap-discontinuity guard for normalized
//!   angles
//! - Sign-entry (sankranti) search: windowed, directional, and ranged
//! - Solstice search and the tropical lunar month count
//! - Ayanamsa zero-point bisection and precession rate
//! - Eclipse candidate enumeration with an elapsed-range cap
//!
//! All positions come from an injected [`drik_ephem::Ephemeris`]; every
//! search is stateless and recomputable from its window and step.

pub mod ayanamsa;
pub mod eclipse;
pub mod error;
pub mod sankranti;
pub mod scan;
pub mod solstice;

pub use ayanamsa::{JULIAN_YEAR_DAYS, ayanamsa_zero_point, precession_rate_arcsec};
pub use eclipse::{EVENT_LIMIT_DAYS, EclipseEvent, EclipseKind, next_eclipse, search_eclipses};
pub use error::SearchError;
pub use sankranti::{
    SankrantiEvent, find_sankranti, next_sankranti, next_specific_sankranti, prev_sankranti,
    prev_specific_sankranti, search_sankrantis,
};
pub use scan::{SearchConfig, SearchDirection, find_crossing, search_roots};
pub use solstice::{
    Ayana, SYNODIC_MONTH_DAYS, next_solstice, prev_solstice, vedic_month,
};
