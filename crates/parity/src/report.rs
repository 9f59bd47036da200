//! Per-strategy comparison results.

use std::time::Duration;

use swelter_grid::Strategy;

/// How one strategy's output compares with the reference output.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyParity {
    pub(crate) strategy: Strategy,
    pub(crate) max_abs_diff: f64,
    pub(crate) max_rel_diff: f64,
    pub(crate) n_exceeding: usize,
    pub(crate) nan_mismatches: usize,
    pub(crate) elapsed: Duration,
}

impl StrategyParity {
    /// Strategy under test.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Largest `|candidate - reference|` over elements where both are non-NaN.
    pub fn max_abs_diff(&self) -> f64 {
        self.max_abs_diff
    }

    /// Largest absolute difference divided by `|reference|` (or by 1 when the
    /// reference is zero).
    pub fn max_rel_diff(&self) -> f64 {
        self.max_rel_diff
    }

    /// Number of elements whose absolute difference exceeds the tolerance.
    pub fn n_exceeding(&self) -> usize {
        self.n_exceeding
    }

    /// Number of elements where exactly one of candidate and reference is NaN.
    pub fn nan_mismatches(&self) -> usize {
        self.nan_mismatches
    }

    /// Wall-clock time of the strategy's grid evaluation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `true` if every element agrees within tolerance.
    pub fn passed(&self) -> bool {
        self.n_exceeding == 0 && self.nan_mismatches == 0
    }
}

/// Outcome of comparing a set of strategies on one pair of grids.
#[derive(Debug, Clone, PartialEq)]
pub struct ParityReport {
    pub(crate) n_elements: usize,
    pub(crate) tolerance: f64,
    pub(crate) reference_elapsed: Duration,
    pub(crate) strategies: Vec<StrategyParity>,
}

impl ParityReport {
    /// Number of grid elements compared.
    pub fn n_elements(&self) -> usize {
        self.n_elements
    }

    /// Absolute tolerance applied.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Wall-clock time of the reference evaluation.
    pub fn reference_elapsed(&self) -> Duration {
        self.reference_elapsed
    }

    /// Per-strategy results, in the order requested.
    pub fn strategies(&self) -> &[StrategyParity] {
        &self.strategies
    }

    /// Result for `strategy`, if it was compared.
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyParity> {
        self.strategies.iter().find(|s| s.strategy == strategy)
    }

    /// Strategies that disagreed with the reference.
    pub fn failures(&self) -> impl Iterator<Item = &StrategyParity> {
        self.strategies.iter().filter(|s| !s.passed())
    }

    /// `true` if every compared strategy passed.
    pub fn passed(&self) -> bool {
        self.strategies.iter().all(StrategyParity::passed)
    }
}
