//! Cross-strategy parity checks for the swelter heat index kernels.
//!
//! Each [`Strategy`](swelter_grid::Strategy) is run on the same grids and
//! compared element by element with the sequential elementwise reference.
//!
//! # Quick start
//!
//! ```
//! use swelter_parity::{ParityConfig, run_parity};
//!
//! let config = ParityConfig::new().with_shape([2, 10, 10]).with_seed(7);
//! let report = run_parity(&config).unwrap();
//! assert!(report.passed());
//! assert_eq!(report.n_elements(), 200);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! run_parity()
//!   ├─ config.validate()
//!   ├─ SyntheticGrid::from_config()   (synthetic.rs)
//!   └─ compare_strategies()           (compare.rs)
//!        ├─ reference: Strategy::Elementwise
//!        └─ measure() per strategy
//! ```

mod compare;
mod config;
mod error;
mod report;
mod scenario;
mod synthetic;

pub use compare::{REFERENCE, compare_strategies};
pub use config::ParityConfig;
pub use error::ParityError;
pub use report::{ParityReport, StrategyParity};
pub use scenario::{Scenario, reference_scenarios};
pub use synthetic::SyntheticGrid;

use rand::SeedableRng;
use swelter_grid::Strategy;
use tracing::{debug, info};

/// Builds a seeded or OS-sourced RNG.
fn make_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    }
}

/// Generates a synthetic grid from `config` and compares every configured
/// strategy with the reference on it.
///
/// # Errors
///
/// Returns [`ParityError::InvalidConfig`] if the configuration fails
/// validation.
#[tracing::instrument(skip(config), fields(shape = ?config.shape(), seed = ?config.seed()))]
pub fn run_parity(config: &ParityConfig) -> Result<ParityReport, ParityError> {
    config.validate()?;

    let mut rng = make_rng(config.seed());
    let grid = SyntheticGrid::from_config(config, &mut rng)?;
    debug!(n = grid.len(), "synthetic grid generated");

    let report = compare_strategies(
        grid.temp(),
        grid.rh(),
        config.strategies(),
        config.tolerance(),
    )?;
    info!(passed = report.passed(), "random grid parity");
    Ok(report)
}

/// Compares `strategies` on each of the [`reference_scenarios`].
///
/// # Errors
///
/// Returns [`ParityError::InvalidConfig`] if `tolerance` is not finite and
/// positive.
#[tracing::instrument(skip(strategies))]
pub fn run_scenarios(
    strategies: &[Strategy],
    tolerance: f64,
) -> Result<Vec<(Scenario, ParityReport)>, ParityError> {
    reference_scenarios()
        .into_iter()
        .map(|scenario| {
            let (temp, rh) = scenario.grid();
            let report = compare_strategies(&temp, &rh, strategies, tolerance)?;
            debug!(scenario = scenario.name, passed = report.passed(), "scenario parity");
            Ok((scenario, report))
        })
        .collect()
}
