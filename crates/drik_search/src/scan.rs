//! Coarse scan + bisection over a sign-changing function of time.
//!
//! The scan steps through the window evaluating `f`; whenever two
//! successive samples straddle zero (and the jump is not a wrap-around
//! discontinuity of a +-180-normalized angle), bisection refines the
//! crossing. The result sequence is finite and recomputable from the
//! same window and step.

use drik_math::{EVENT_TOLERANCE_DAYS, find_root};

use crate::error::SearchError;

/// Scan direction from the starting instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// Scan parameters for directional and ranged searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Coarse scan step in days. Must be small enough that `f` cannot
    /// complete a half-period between samples.
    pub step_days: f64,
    /// Bisection convergence tolerance in days.
    pub tolerance_days: f64,
    /// Maximum total span scanned by a directional search before giving
    /// up, in days.
    pub max_scan_days: f64,
}

impl SearchConfig {
    pub fn new(step_days: f64, tolerance_days: f64, max_scan_days: f64) -> Self {
        Self {
            step_days,
            tolerance_days,
            max_scan_days,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !(self.step_days > 0.0) {
            return Err("step_days must be positive");
        }
        if !(self.tolerance_days > 0.0) {
            return Err("tolerance_days must be positive");
        }
        if self.max_scan_days < self.step_days {
            return Err("max_scan_days must be at least one step");
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    /// One-day scan step over at most ~800 days, event-grade tolerance.
    fn default() -> Self {
        Self {
            step_days: 1.0,
            tolerance_days: EVENT_TOLERANCE_DAYS,
            max_scan_days: 800.0,
        }
    }
}

/// Check if a sign change is a genuine zero crossing rather than the
/// +-180 wrap of a normalized angle. A genuine crossing has both values
/// comparatively small; the wrap jumps by nearly 360.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first genuine zero crossing of `f` scanning from `jd_start`
/// in the given direction. `Ok(None)` when the scan range is exhausted
/// without a crossing.
pub fn find_crossing(
    f: &mut dyn FnMut(f64) -> f64,
    jd_start: f64,
    direction: SearchDirection,
    config: &SearchConfig,
) -> Result<Option<f64>, SearchError> {
    config.validate().map_err(SearchError::InvalidWindow)?;

    let step = match direction {
        SearchDirection::Forward => config.step_days,
        SearchDirection::Backward => -config.step_days,
    };
    let max_steps = (config.max_scan_days / config.step_days).ceil() as usize;

    let mut t_prev = jd_start;
    let mut f_prev = f(t_prev);

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr);

        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, t_b) = if t_prev < t_curr {
                (t_prev, t_curr)
            } else {
                (t_curr, t_prev)
            };
            let root = find_root(f, t_a, t_b, config.tolerance_days)?;
            return Ok(Some(root));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

/// Enumerate every genuine zero crossing of `f` in `[jd_start, jd_end]`.
///
/// An empty window scan is an error; an event-free window is not, it
/// yields an empty vector.
pub fn search_roots(
    f: &mut dyn FnMut(f64) -> f64,
    jd_start: f64,
    jd_end: f64,
    config: &SearchConfig,
) -> Result<Vec<f64>, SearchError> {
    config.validate().map_err(SearchError::InvalidWindow)?;
    if jd_end <= jd_start {
        return Err(SearchError::InvalidWindow("jd_end must be after jd_start"));
    }

    let mut roots = Vec::new();
    let mut t_prev = jd_start;
    let mut f_prev = f(t_prev);

    loop {
        let t_curr = (t_prev + config.step_days).min(jd_end);
        let f_curr = f(t_curr);

        if is_genuine_crossing(f_prev, f_curr) {
            let root = find_root(f, t_prev, t_curr, config.tolerance_days)?;
            if root >= jd_start && root <= jd_end {
                roots.push(root);
            }
        }

        if t_curr >= jd_end {
            break;
        }
        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(roots)
}
