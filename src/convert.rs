//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use swelter_grid::Strategy;
use swelter_parity::ParityConfig;

use crate::config::ParityToml;

/// Parses a grid strategy name string into the corresponding enum variant.
pub fn parse_strategy(s: &str) -> Result<Strategy> {
    match s.to_lowercase().as_str() {
        "elementwise" | "loop" => Ok(Strategy::Elementwise),
        "masked" | "where" => Ok(Strategy::Masked),
        "parallel" | "rayon" => Ok(Strategy::Parallel),
        other => bail!("unknown strategy: {other:?}"),
    }
}

/// Builds a [`ParityConfig`] from the TOML parity configuration.
///
/// Duplicate strategy names are collapsed, keeping first occurrence order.
pub fn build_parity_config(parity: &ParityToml) -> Result<ParityConfig> {
    let mut strategies = Vec::with_capacity(parity.strategies.len());
    for name in &parity.strategies {
        let strategy = parse_strategy(name)?;
        if !strategies.contains(&strategy) {
            strategies.push(strategy);
        }
    }

    let mut cfg = ParityConfig::new()
        .with_shape(parity.shape.clone())
        .with_temp_range(parity.temp_range[0], parity.temp_range[1])
        .with_rh_range(parity.rh_range[0], parity.rh_range[1])
        .with_tolerance(parity.tolerance)
        .with_strategies(strategies);
    if let Some(s) = parity.seed {
        cfg = cfg.with_seed(s);
    }
    cfg.validate()?;
    Ok(cfg)
}
