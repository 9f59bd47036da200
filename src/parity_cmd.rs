//! Parity command: compare every grid strategy with the elementwise reference.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use swelter_parity::{ParityReport, REFERENCE, run_parity, run_scenarios};

use crate::cli::ParityArgs;
use crate::config::ParityToml;
use crate::convert;

/// Run the parity checks.
pub fn run(args: ParityArgs) -> Result<()> {
    let _cmd = info_span!("parity").entered();

    // 1. Load optional TOML config
    let mut parity_toml = if let Some(ref config_path) = args.config {
        let toml_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read parity config: {}", config_path.display()))?;
        toml::from_str::<ParityToml>(&toml_str).context("failed to parse parity TOML")?
    } else {
        ParityToml::default()
    };

    // 2. Merge CLI flags; CLI values override the config file
    if let Some(seed) = args.seed {
        parity_toml.seed = Some(seed);
    }
    if let Some(shape) = args.shape {
        parity_toml.shape = shape;
    }
    if let Some(tolerance) = args.tolerance {
        parity_toml.tolerance = tolerance;
    }
    if !args.strategies.is_empty() {
        parity_toml.strategies = args.strategies;
    }

    let config = convert::build_parity_config(&parity_toml)?;
    info!(
        shape = ?config.shape(),
        strategies = config.strategies().len(),
        "parity configuration"
    );

    // 3. Fixed scenarios
    let mut failed = 0;
    for (scenario, report) in run_scenarios(config.strategies(), config.tolerance())? {
        println!("scenario {} (temp={}, rh={})", scenario.name, scenario.temp, scenario.rh);
        print_report(&report);
        failed += report.failures().count();
    }

    // 4. Random grid
    let report = run_parity(&config).context("random grid parity run failed")?;
    println!("random grid {:?}", config.shape());
    print_report(&report);
    failed += report.failures().count();

    if failed > 0 {
        bail!("{failed} strategy comparison(s) exceeded tolerance {:e}", config.tolerance());
    }
    info!("all strategies agree");
    Ok(())
}

fn print_report(report: &ParityReport) {
    println!(
        "  {:<12} {:>10.3} ms  (reference, {} elements)",
        REFERENCE.name(),
        report.reference_elapsed().as_secs_f64() * 1e3,
        report.n_elements()
    );
    for s in report.strategies() {
        println!(
            "  {:<12} {:>10.3} ms  max|diff|={:.3e}  max rel={:.3e}  {}",
            s.strategy().name(),
            s.elapsed().as_secs_f64() * 1e3,
            s.max_abs_diff(),
            s.max_rel_diff(),
            if s.passed() { "ok" } else { "MISMATCH" }
        );
    }
}
