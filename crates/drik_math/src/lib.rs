//! Pure numeric kernels shared by every calendar and event computation:
//! angle normalization and unwrapping, bisection root finding, and inverse
//! Lagrange interpolation.
//!
//! Nothing here touches an ephemeris; all functions are deterministic and
//! side-effect-free.

pub mod angle;
pub mod bisect;
pub mod error;
pub mod interpolate;

pub use angle::{Dms, from_dms, normalize_180, normalize_360, to_dms, to_dms_precise, unwrap_angles};
pub use bisect::{EPOCH_TOLERANCE_DAYS, EVENT_TOLERANCE_DAYS, find_root};
pub use error::MathError;
pub use interpolate::inverse_lagrange;
