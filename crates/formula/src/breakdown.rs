//! Per-term view of a single heat index evaluation.

use crate::terms::{
    dry_adjustment, dry_adjustment_applies, full_regression, humid_adjustment,
    humid_adjustment_applies, simple_regression, uses_full_regression,
};

/// Which regression produced the final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Simple regression was at or below 80 °F.
    Simple,
    /// Full regression, possibly adjusted.
    Full,
}

/// Every term that contributed to one heat index value.
///
/// Terms that were not evaluated are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatIndexBreakdown {
    simple: f64,
    full: Option<f64>,
    dry: Option<f64>,
    humid: Option<f64>,
}

impl HeatIndexBreakdown {
    /// Evaluates the formula for one `(temp, rh)` pair, keeping each term.
    pub fn evaluate(temp: f64, rh: f64) -> Self {
        let simple = simple_regression(temp, rh);
        if !uses_full_regression(simple) {
            return Self {
                simple,
                full: None,
                dry: None,
                humid: None,
            };
        }
        Self {
            simple,
            full: Some(full_regression(temp, rh)),
            dry: dry_adjustment_applies(temp, rh).then(|| dry_adjustment(temp, rh)),
            humid: humid_adjustment_applies(temp, rh).then(|| humid_adjustment(temp, rh)),
        }
    }

    /// Branch taken.
    pub fn branch(&self) -> Branch {
        if self.full.is_some() {
            Branch::Full
        } else {
            Branch::Simple
        }
    }

    /// Simple-regression value (always evaluated).
    pub fn simple(&self) -> f64 {
        self.simple
    }

    /// Full-regression value, before adjustments.
    pub fn full(&self) -> Option<f64> {
        self.full
    }

    /// Dry adjustment subtracted from the full regression.
    pub fn dry(&self) -> Option<f64> {
        self.dry
    }

    /// Humid adjustment added to the full regression.
    pub fn humid(&self) -> Option<f64> {
        self.humid
    }

    /// Final heat index, combining the terms in the same order as
    /// [`heat_index`](crate::heat_index).
    pub fn value(&self) -> f64 {
        let Some(mut hi) = self.full else {
            return self.simple;
        };
        if let Some(dry) = self.dry {
            hi -= dry;
        }
        if let Some(humid) = self.humid {
            hi += humid;
        }
        hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn simple_branch_has_no_full_terms() {
        let b = HeatIndexBreakdown::evaluate(70.0, 0.5);
        assert_eq!(b.branch(), Branch::Simple);
        assert!(b.full().is_none());
        assert!(b.dry().is_none());
        assert!(b.humid().is_none());
        assert_relative_eq!(b.value(), 66.7235, epsilon = 1e-12);
    }

    #[test]
    fn dry_branch_records_adjustment() {
        let b = HeatIndexBreakdown::evaluate(95.0, 0.10);
        assert_eq!(b.branch(), Branch::Full);
        assert_relative_eq!(b.dry().unwrap(), 3.225, epsilon = 1e-12);
        assert!(b.humid().is_none());
    }

    #[test]
    fn humid_branch_records_adjustment() {
        let b = HeatIndexBreakdown::evaluate(85.0, 0.90);
        assert_eq!(b.branch(), Branch::Full);
        assert!(b.dry().is_none());
        assert_relative_eq!(b.humid().unwrap(), -3.364, epsilon = 1e-12);
    }

    #[test]
    fn no_adjustment_branch() {
        let b = HeatIndexBreakdown::evaluate(90.0, 0.65);
        assert_eq!(b.branch(), Branch::Full);
        assert!(b.dry().is_none());
        assert!(b.humid().is_none());
        assert_eq!(b.value(), b.full().unwrap());
    }
}
