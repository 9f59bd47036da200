//! Strategy-versus-reference comparison.

use std::time::{Duration, Instant};

use ndarray::{Array, ArrayBase, Data, Dimension};
use swelter_grid::{Strategy, heat_index_array};
use tracing::{debug, warn};

use crate::error::ParityError;
use crate::report::{ParityReport, StrategyParity};

/// Strategy every other strategy is measured against.
pub const REFERENCE: Strategy = Strategy::Elementwise;

/// Evaluates `temp`/`rh` with [`REFERENCE`] and with each of `strategies`,
/// reporting how far each strategy strays from the reference.
///
/// Strategies run one after another so their timings do not overlap.
///
/// # Errors
///
/// Returns [`ParityError::InvalidConfig`] if `tolerance` is not finite and
/// positive, and [`ParityError::Grid`] if the grids differ in shape.
#[tracing::instrument(skip(temp, rh), fields(n = temp.len()))]
pub fn compare_strategies<S1, S2, D>(
    temp: &ArrayBase<S1, D>,
    rh: &ArrayBase<S2, D>,
    strategies: &[Strategy],
    tolerance: f64,
) -> Result<ParityReport, ParityError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ParityError::InvalidConfig {
            reason: format!("tolerance must be finite and > 0, got {tolerance}"),
        });
    }

    let (reference, reference_elapsed) = timed(|| heat_index_array(temp, rh, REFERENCE))?;

    let mut results = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let (candidate, elapsed) = timed(|| heat_index_array(temp, rh, strategy))?;
        let parity = measure(strategy, &reference, &candidate, tolerance, elapsed);
        if parity.passed() {
            debug!(
                %strategy,
                max_abs_diff = parity.max_abs_diff,
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "strategy matches reference"
            );
        } else {
            warn!(
                %strategy,
                n_exceeding = parity.n_exceeding,
                nan_mismatches = parity.nan_mismatches,
                max_abs_diff = parity.max_abs_diff,
                "strategy disagrees with reference"
            );
        }
        results.push(parity);
    }

    Ok(ParityReport {
        n_elements: temp.len(),
        tolerance,
        reference_elapsed,
        strategies: results,
    })
}

fn timed<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(T, Duration), E> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}

/// Element-wise comparison of two equal-shaped outputs.
///
/// Elements that are NaN in both outputs count as agreeing.
fn measure<D: Dimension>(
    strategy: Strategy,
    reference: &Array<f64, D>,
    candidate: &Array<f64, D>,
    tolerance: f64,
    elapsed: Duration,
) -> StrategyParity {
    let mut parity = StrategyParity {
        strategy,
        max_abs_diff: 0.0,
        max_rel_diff: 0.0,
        n_exceeding: 0,
        nan_mismatches: 0,
        elapsed,
    };

    for (&r, &c) in reference.iter().zip(candidate.iter()) {
        match (r.is_nan(), c.is_nan()) {
            (true, true) => continue,
            (true, false) | (false, true) => {
                parity.nan_mismatches += 1;
                continue;
            }
            (false, false) => {}
        }
        // Matching infinities compare equal; inf - inf would be NaN.
        let abs = if r == c { 0.0 } else { (c - r).abs() };
        let rel = if r != 0.0 { abs / r.abs() } else { abs };
        parity.max_abs_diff = parity.max_abs_diff.max(abs);
        parity.max_rel_diff = parity.max_rel_diff.max(rel);
        if abs > tolerance {
            parity.n_exceeding += 1;
        }
    }

    parity
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    fn measure_1d(reference: Array1<f64>, candidate: Array1<f64>) -> StrategyParity {
        measure(Strategy::Masked, &reference, &candidate, 1e-9, Duration::ZERO)
    }

    #[test]
    fn identical_outputs_pass() {
        let p = measure_1d(array![1.0, 2.0, 3.0], array![1.0, 2.0, 3.0]);
        assert!(p.passed());
        assert_eq!(p.max_abs_diff(), 0.0);
    }

    #[test]
    fn difference_beyond_tolerance_fails() {
        let p = measure_1d(array![80.0, 90.0], array![80.0, 90.001]);
        assert!(!p.passed());
        assert_eq!(p.n_exceeding(), 1);
        assert!((p.max_abs_diff() - 0.001).abs() < 1e-9);
        assert!((p.max_rel_diff() - 0.001 / 90.0).abs() < 1e-12);
    }

    #[test]
    fn difference_within_tolerance_passes() {
        let p = measure_1d(array![80.0], array![80.0 + 1e-12]);
        assert!(p.passed());
        assert!(p.max_abs_diff() > 0.0);
    }

    #[test]
    fn shared_nan_agrees() {
        let p = measure_1d(array![f64::NAN, 1.0], array![f64::NAN, 1.0]);
        assert!(p.passed());
    }

    #[test]
    fn lone_nan_is_mismatch() {
        let p = measure_1d(array![f64::NAN, 1.0], array![0.0, 1.0]);
        assert!(!p.passed());
        assert_eq!(p.nan_mismatches(), 1);
        assert_eq!(p.n_exceeding(), 0);
    }

    #[test]
    fn matching_infinities_agree() {
        let p = measure_1d(array![f64::INFINITY], array![f64::INFINITY]);
        assert!(p.passed());
    }

    #[test]
    fn zero_reference_uses_absolute_for_relative() {
        let p = measure_1d(array![0.0], array![0.5]);
        assert_eq!(p.max_rel_diff(), 0.5);
    }

    #[test]
    fn rejects_bad_tolerance() {
        let grid = Array1::from_elem(4, 90.0);
        let result = compare_strategies(&grid, &grid, &Strategy::ALL, 0.0);
        assert!(matches!(result, Err(ParityError::InvalidConfig { .. })));
    }
}
