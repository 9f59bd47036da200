//! Compute command: heat index and term breakdown for a single reading.

use anyhow::{Result, bail};
use tracing::{debug, info_span, warn};

use swelter_formula::{Branch, breakdown};

use crate::cli::ComputeArgs;

/// Run the single-pair computation.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();
    if args.temp.is_nan() || args.rh.is_nan() {
        bail!("temperature and humidity must be numbers");
    }
    if args.rh > 1.0 {
        warn!(rh = args.rh, "rh above 1.0; humidity is expected as a 0-1 fraction");
    }

    let b = breakdown(args.temp, args.rh);
    debug!(?b, "evaluated");

    println!("heat index: {:.4} °F", b.value());
    match b.branch() {
        Branch::Simple => println!("  simple regression: {:.4}", b.simple()),
        Branch::Full => {
            println!("  simple regression: {:.4} (> 80, full regression used)", b.simple());
            if let Some(full) = b.full() {
                println!("  full regression:   {full:.4}");
            }
            if let Some(dry) = b.dry() {
                println!("  dry adjustment:   -{dry:.4}");
            }
            if let Some(humid) = b.humid() {
                println!("  humid adjustment: {humid:+.4}");
            }
        }
    }
    Ok(())
}
