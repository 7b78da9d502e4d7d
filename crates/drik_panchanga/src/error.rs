//! Error types for calendar-unit computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use drik_math::MathError;

/// Errors from boundary determination and month classification.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangaError {
    /// Error from the numeric kernels (interpolation or unwrapping).
    Math(MathError),
    /// More than one whole unit elapsed within a single solar day.
    ///
    /// The boundary algorithm locates at most one skipped unit per day;
    /// faster motion than that is outside the rates of real solar/lunar
    /// longitude and indicates a broken measure function.
    DoubleLeap(&'static str),
}

impl Display for PanchangaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Math(e) => write!(f, "math error: {e}"),
            Self::DoubleLeap(msg) => write!(f, "double leap: {msg}"),
        }
    }
}

impl Error for PanchangaError {}

impl From<MathError> for PanchangaError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}
