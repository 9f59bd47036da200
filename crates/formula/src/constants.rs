//! Thresholds and regression coefficients of the NOAA heat index.
//!
//! Humidity thresholds are compared against `rh` exactly as given. The
//! adjustment terms themselves use the percent-scale constants 13 and 85
//! even though `rh` is conventionally a 0-1 fraction, so the adjustments only
//! fire for near-dry and near-saturated fractions.

/// Simple-regression values strictly above this switch to the full regression.
pub const FULL_REGRESSION_THRESHOLD: f64 = 80.0;

/// `rh` must be strictly below this for the dry adjustment.
pub const DRY_RH_MAX: f64 = 0.13;

/// Exclusive temperature bounds (°F) for the dry adjustment.
pub const DRY_TEMP_RANGE: (f64, f64) = (80.0, 112.0);

/// `rh` must be strictly above this for the humid adjustment.
pub const HUMID_RH_MIN: f64 = 0.85;

/// Exclusive temperature bounds (°F) for the humid adjustment.
pub const HUMID_TEMP_RANGE: (f64, f64) = (80.0, 87.0);

/// Rothfusz regression coefficients, `c[0]` is the intercept.
///
/// Term order: 1, T, R, T·R, T², R², T²·R, T·R², T²·R².
pub const FULL_COEFFICIENTS: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -0.00683783,
    -0.05481717,
    0.00122874,
    0.00085282,
    -0.00000199,
];
