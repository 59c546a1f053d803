//! Host harness for lp-rsqrt.
//!
//! Prints `x=<magnitude>  estimate≈<value>` for a sample vector, the same lines
//! the RV32 firmware test prints, and optionally checks each estimate against
//! the exact value.

pub mod args;
pub mod config;
pub mod error;
pub mod report;

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use lp_rsqrt::ErrorBound;
use log::{debug, info};

pub use args::{Cli, MultiplierArg, RoundingArg};
pub use config::{HarnessConfig, SAMPLE_VECTOR};
pub use error::HarnessError;
pub use report::SampleReport;

/// Run the harness, writing one line per sample to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<Vec<SampleReport>> {
    let config = HarnessConfig::resolve(cli)?;
    let bound = ErrorBound::for_config(config.estimator);
    debug!(
        "estimator={:?} multiplier={} bound={bound:?}",
        config.estimator,
        report::multiplier_name(cli.multiplier)
    );

    let start = Instant::now();
    let estimates: Vec<(u32, u32)> = config
        .samples
        .iter()
        .map(|&x| (x, report::estimate_using(cli.multiplier, x, config.estimator)))
        .collect();
    let elapsed = start.elapsed();
    info!("{} estimates in {elapsed:?}", estimates.len());

    let reports: Vec<SampleReport> = estimates
        .into_iter()
        .map(|(x, y)| SampleReport::new(x, y, bound))
        .collect();
    for report in &reports {
        report.write_line(out, config.digits, cli.check)?;
    }

    if cli.check {
        let failed: Vec<u32> = reports
            .iter()
            .filter(|r| !r.within_bound)
            .map(|r| r.x)
            .collect();
        if !failed.is_empty() {
            return Err(HarnessError::OutOfBounds {
                failed,
                checked: reports.len(),
                bound,
            }
            .into());
        }
        info!("all {} estimates within bound", reports.len());
    }

    Ok(reports)
}
