//! Error types for the numeric kernels.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from root finding, interpolation, and angle normalization.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MathError {
    /// Root finder invoked on an interval with no sign change.
    NoBracket(&'static str),
    /// Iteration ceiling exceeded before the bracket reached tolerance.
    NoConvergence(&'static str),
    /// Interpolation samples are not pairwise distinct (or lengths differ).
    DegenerateSamples(&'static str),
    /// Angle sequence is not non-decreasing even after unwrapping.
    NotMonotonic(&'static str),
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoBracket(msg) => write!(f, "no sign change across bracket: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::DegenerateSamples(msg) => write!(f, "degenerate samples: {msg}"),
            Self::NotMonotonic(msg) => write!(f, "sequence not monotonic: {msg}"),
        }
    }
}

impl Error for MathError {}
