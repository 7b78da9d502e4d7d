//! Error type for event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use drik_math::MathError;
use drik_panchanga::PanchangaError;

/// Errors from periodic event enumeration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the numeric kernels (bracketing or convergence).
    Math(MathError),
    /// Error from a calendar-unit computation consulted during a search.
    Panchanga(PanchangaError),
    /// Search window or scan configuration is unusable as given.
    InvalidWindow(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math(e) => write!(f, "math error: {e}"),
            Self::Panchanga(e) => write!(f, "panchanga error: {e}"),
            Self::InvalidWindow(msg) => write!(f, "invalid window: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Math(e) => Some(e),
            Self::Panchanga(e) => Some(e),
            Self::InvalidWindow(_) => None,
        }
    }
}

impl From<MathError> for SearchError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl From<PanchangaError> for SearchError {
    fn from(e: PanchangaError) -> Self {
        Self::Panchanga(e)
    }
}
