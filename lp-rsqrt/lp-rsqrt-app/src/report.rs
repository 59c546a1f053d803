//! Per-sample estimate lines.

use std::io::Write;

use anyhow::Result;
use lp_rsqrt::{
    Chunked, DefaultMultiplier, ErrorBound, Hardware, Multiplier, Q16, RsqrtConfig, ShiftAdd,
    estimate_with,
};

use crate::args::MultiplierArg;

/// One estimated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReport {
    pub x: u32,
    pub estimate: u32,
    /// `2^16 / sqrt(x)`, 0 for `x == 0`
    pub exact: f64,
    pub within_bound: bool,
}

impl SampleReport {
    pub fn new(x: u32, estimate: u32, bound: ErrorBound) -> Self {
        SampleReport {
            x,
            estimate,
            exact: exact_q16(x),
            within_bound: bound.allows(x, estimate),
        }
    }

    /// Signed error in Q16 units.
    pub fn error_units(&self) -> f64 {
        f64::from(self.estimate) - self.exact
    }

    /// `x=<magnitude>  estimate≈<int>.<digits>`, plus exact value and error
    /// when `check` is set.
    pub fn write_line(&self, out: &mut dyn Write, digits: u8, check: bool) -> Result<()> {
        write!(
            out,
            "x={}  estimate≈{}",
            self.x,
            Q16(self.estimate).display(digits)
        )?;
        if check {
            write!(
                out,
                "  exact={:.4}  err={:+.3}{}",
                self.exact / 65536.0,
                self.error_units(),
                if self.within_bound { "" } else { "  OUT OF BOUNDS" }
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Exact Q16 value of `1/sqrt(x)`.
pub fn exact_q16(x: u32) -> f64 {
    if x == 0 {
        0.0
    } else {
        65536.0 / f64::from(x).sqrt()
    }
}

/// Name of the multiplier a [`MultiplierArg`] resolves to.
pub fn multiplier_name(multiplier: MultiplierArg) -> &'static str {
    match multiplier {
        MultiplierArg::Build => DefaultMultiplier::NAME,
        MultiplierArg::ShiftAdd => ShiftAdd::NAME,
        MultiplierArg::Chunked => Chunked::NAME,
        MultiplierArg::Hardware => Hardware::NAME,
    }
}

/// Estimate `x` with the chosen multiplier.
pub fn estimate_using(multiplier: MultiplierArg, x: u32, config: RsqrtConfig) -> u32 {
    match multiplier {
        MultiplierArg::Build => estimate_with::<DefaultMultiplier>(x, config),
        MultiplierArg::ShiftAdd => estimate_with::<ShiftAdd>(x, config),
        MultiplierArg::Chunked => estimate_with::<Chunked>(x, config),
        MultiplierArg::Hardware => estimate_with::<Hardware>(x, config),
    }
}
