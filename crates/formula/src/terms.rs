//! The four regression terms and the guards that decide when each applies.
//!
//! Every term is evaluated unguarded: callers that bulk-evaluate a term over
//! a grid may see non-physical values (or NaN from [`dry_adjustment`]) at
//! points where the guard would have excluded it.

use crate::constants::{
    DRY_RH_MAX, DRY_TEMP_RANGE, FULL_COEFFICIENTS, FULL_REGRESSION_THRESHOLD, HUMID_RH_MIN,
    HUMID_TEMP_RANGE,
};

/// Linear approximation, valid while the heat index stays at or below 80 °F.
#[inline]
pub fn simple_regression(temp: f64, rh: f64) -> f64 {
    0.5 * (temp + 61.0 + ((temp - 68.0) * 1.2) + (rh * 0.094))
}

/// Full Rothfusz polynomial in temperature and humidity.
#[inline]
pub fn full_regression(temp: f64, rh: f64) -> f64 {
    let c = &FULL_COEFFICIENTS;
    c[0] + (c[1] * temp) + (c[2] * rh) + (c[3] * temp * rh)
        + (c[4] * temp * temp)
        + (c[5] * rh * rh)
        + (c[6] * temp * temp * rh)
        + (c[7] * temp * rh * rh)
        + (c[8] * temp * temp * rh * rh)
}

/// Amount subtracted from the full regression in dry heat.
///
/// NaN when `|temp - 95| > 17`; never the case inside the dry guard.
#[inline]
pub fn dry_adjustment(temp: f64, rh: f64) -> f64 {
    ((13.0 - rh) / 4.0) * ((17.0 - (temp - 95.0).abs()) / 17.0).sqrt()
}

/// Amount added to the full regression in humid heat.
#[inline]
pub fn humid_adjustment(temp: f64, rh: f64) -> f64 {
    ((rh - 85.0) / 10.0) * ((87.0 - temp) / 5.0)
}

/// Returns `true` when a simple-regression value calls for the full regression.
///
/// The comparison is strict: exactly 80.0 keeps the simple value.
#[inline]
pub fn uses_full_regression(simple: f64) -> bool {
    simple > FULL_REGRESSION_THRESHOLD
}

/// Guard for [`dry_adjustment`].
#[inline]
pub fn dry_adjustment_applies(temp: f64, rh: f64) -> bool {
    rh < DRY_RH_MAX && DRY_TEMP_RANGE.0 < temp && temp < DRY_TEMP_RANGE.1
}

/// Guard for [`humid_adjustment`].
#[inline]
pub fn humid_adjustment_applies(temp: f64, rh: f64) -> bool {
    rh > HUMID_RH_MIN && HUMID_TEMP_RANGE.0 < temp && temp < HUMID_TEMP_RANGE.1
}
