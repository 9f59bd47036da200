//! NOAA heat index for a single temperature/humidity pair.
//!
//! The heat index is a piecewise regression:
//!
//! | Step | Condition | Result |
//! |------|-----------|--------|
//! | 1 | always | `simple = 0.5 (T + 61 + 1.2 (T - 68) + 0.094 R)` |
//! | 2 | `simple <= 80` | `simple` |
//! | 3 | otherwise | Rothfusz polynomial `full(T, R)` |
//! | 4 | `R < 0.13`, `80 < T < 112` | `full - dry(T, R)` |
//! | 5 | `R > 0.85`, `80 < T < 87` | `... + humid(T, R)` |
//!
//! `T` is in °F and `R` is relative humidity as a 0-1 fraction. The
//! adjustment terms keep the percent-scale constants 13 and 85, so the
//! humid adjustment is large and negative when it fires.
//!
//! # Quick start
//!
//! ```
//! use swelter_formula::heat_index;
//!
//! let hi = heat_index(90.0, 0.65);
//! assert!((hi - 86.562_695_589_175).abs() < 1e-9);
//! ```
//!
//! Every function here is pure and total: it never panics, and values outside
//! the calibrated 70-120 °F range are returned as computed.

mod breakdown;
mod constants;
mod terms;

pub use breakdown::{Branch, HeatIndexBreakdown};
pub use constants::{
    DRY_RH_MAX, DRY_TEMP_RANGE, FULL_COEFFICIENTS, FULL_REGRESSION_THRESHOLD, HUMID_RH_MIN,
    HUMID_TEMP_RANGE,
};
pub use terms::{
    dry_adjustment, dry_adjustment_applies, full_regression, humid_adjustment,
    humid_adjustment_applies, simple_regression, uses_full_regression,
};

/// Computes the heat index (°F) for one temperature (°F) and humidity fraction.
///
/// Both adjustments are checked in order and may stack, though for
/// `rh <= 1` their humidity guards never overlap.
#[inline]
pub fn heat_index(temp: f64, rh: f64) -> f64 {
    let simple = simple_regression(temp, rh);
    if !uses_full_regression(simple) {
        return simple;
    }

    let mut hi = full_regression(temp, rh);
    if dry_adjustment_applies(temp, rh) {
        hi -= dry_adjustment(temp, rh);
    }
    if humid_adjustment_applies(temp, rh) {
        hi += humid_adjustment(temp, rh);
    }
    hi
}

/// Evaluates the heat index and returns the contributing terms.
///
/// `breakdown(t, r).value()` is bit-identical to `heat_index(t, r)`.
pub fn breakdown(temp: f64, rh: f64) -> HeatIndexBreakdown {
    HeatIndexBreakdown::evaluate(temp, rh)
}
