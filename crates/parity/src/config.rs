//! Configuration for a parity run.

use swelter_grid::Strategy;

use crate::error::ParityError;

/// Settings for generating a synthetic grid and comparing strategies on it.
///
/// Defaults mirror a `4 x 100 x 300` grid with temperatures in `[50, 100)` °F
/// and humidity fractions in `[0.05, 0.95)`, compared at `1e-9`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParityConfig {
    /// Grid shape; every axis must be non-zero.
    shape: Vec<usize>,
    /// Half-open temperature sampling range (°F).
    temp_range: (f64, f64),
    /// Half-open humidity-fraction sampling range.
    rh_range: (f64, f64),
    /// Maximum allowed absolute difference from the reference.
    tolerance: f64,
    /// Strategies compared against [`Strategy::Elementwise`].
    strategies: Vec<Strategy>,
    /// Optional RNG seed for reproducibility.
    seed: Option<u64>,
}

impl ParityConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self {
            shape: vec![4, 100, 300],
            temp_range: (50.0, 100.0),
            rh_range: (0.05, 0.95),
            tolerance: 1e-9,
            strategies: Strategy::ALL.to_vec(),
            seed: None,
        }
    }

    /// Sets the grid shape.
    pub fn with_shape(mut self, shape: impl Into<Vec<usize>>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Sets the temperature sampling range.
    pub fn with_temp_range(mut self, lo: f64, hi: f64) -> Self {
        self.temp_range = (lo, hi);
        self
    }

    /// Sets the humidity sampling range.
    pub fn with_rh_range(mut self, lo: f64, hi: f64) -> Self {
        self.rh_range = (lo, hi);
        self
    }

    /// Sets the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the strategies to compare.
    pub fn with_strategies(mut self, strategies: impl Into<Vec<Strategy>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    /// Sets the RNG seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Accessors ---

    /// Returns the grid shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the temperature sampling range.
    pub fn temp_range(&self) -> (f64, f64) {
        self.temp_range
    }

    /// Returns the humidity sampling range.
    pub fn rh_range(&self) -> (f64, f64) {
        self.rh_range
    }

    /// Returns the comparison tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the strategies to compare.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Returns the RNG seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ParityError> {
        if self.shape.is_empty() {
            return Err(ParityError::InvalidConfig {
                reason: "shape must have at least one axis".to_string(),
            });
        }
        if let Some(axis) = self.shape.iter().position(|&d| d == 0) {
            return Err(ParityError::InvalidConfig {
                reason: format!("shape axis {axis} has zero length"),
            });
        }
        if self
            .shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .is_none()
        {
            return Err(ParityError::InvalidConfig {
                reason: format!("shape {:?} overflows the element count", self.shape),
            });
        }
        validate_range("temp_range", self.temp_range)?;
        validate_range("rh_range", self.rh_range)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ParityError::InvalidConfig {
                reason: format!("tolerance must be finite and > 0, got {}", self.tolerance),
            });
        }
        if self.strategies.is_empty() {
            return Err(ParityError::InvalidConfig {
                reason: "at least one strategy is required".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ParityConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_range(name: &str, (lo, hi): (f64, f64)) -> Result<(), ParityError> {
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(ParityError::InvalidConfig {
            reason: format!("{name} must be finite with lo < hi, got ({lo}, {hi})"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ParityConfig::new().validate().is_ok());
    }

    #[test]
    fn default_values() {
        let config = ParityConfig::default();
        assert_eq!(config.shape(), &[4, 100, 300]);
        assert_eq!(config.temp_range(), (50.0, 100.0));
        assert_eq!(config.rh_range(), (0.05, 0.95));
        assert_eq!(config.strategies(), &Strategy::ALL);
        assert!(config.seed().is_none());
    }

    #[test]
    fn empty_shape_fails() {
        let config = ParityConfig::new().with_shape(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_axis_fails() {
        let config = ParityConfig::new().with_shape([2, 0, 3]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("axis 1"));
    }

    #[test]
    fn overflowing_shape_fails() {
        let config = ParityConfig::new().with_shape([usize::MAX, 2]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_range_fails() {
        let config = ParityConfig::new().with_temp_range(100.0, 50.0);
        assert!(config.validate().is_err());
        let config = ParityConfig::new().with_rh_range(0.5, 0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn nan_range_fails() {
        let config = ParityConfig::new().with_rh_range(f64::NAN, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_tolerance_fails() {
        assert!(ParityConfig::new().with_tolerance(0.0).validate().is_err());
        assert!(ParityConfig::new().with_tolerance(-1e-9).validate().is_err());
        assert!(
            ParityConfig::new()
                .with_tolerance(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn no_strategies_fails() {
        let config = ParityConfig::new().with_strategies(Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_with_seed() {
        let config = ParityConfig::new().with_seed(42);
        assert_eq!(config.seed(), Some(42));
    }
}
