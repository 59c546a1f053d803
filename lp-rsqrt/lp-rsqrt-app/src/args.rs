use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lp_rsqrt::Rounding;

/// Print Q16 reciprocal square root estimates
#[derive(Parser, Debug, Default)]
#[command(name = "lp-rsqrt")]
#[command(about = "Print Q16 reciprocal square root estimates for a set of magnitudes")]
#[command(version)]
pub struct Cli {
    /// Magnitudes to estimate, decimal or 0x-prefixed hex (default: sample vector)
    #[arg(value_parser = parse_magnitude)]
    pub values: Vec<u32>,

    /// Newton-Raphson passes after interpolation
    #[arg(short, long)]
    pub passes: Option<u8>,

    /// Rounding inside each pass
    #[arg(short, long, value_enum)]
    pub rounding: Option<RoundingArg>,

    /// Fractional digits to print
    #[arg(short, long)]
    pub digits: Option<u8>,

    /// Multiplier strategy
    #[arg(short, long, value_enum, default_value = "build")]
    pub multiplier: MultiplierArg,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Compare against the exact value and fail outside the error bound
    #[arg(long)]
    pub check: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingArg {
    Nearest,
    Truncate,
    /// Truncate, splitting the final shift over the halves of the correction
    SplitTruncate,
}

impl From<RoundingArg> for Rounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Nearest => Rounding::Nearest,
            RoundingArg::Truncate => Rounding::Truncate,
            RoundingArg::SplitTruncate => Rounding::SplitTruncate,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MultiplierArg {
    /// Whatever the build selected via cargo features
    #[default]
    Build,
    ShiftAdd,
    Chunked,
    Hardware,
}

fn parse_magnitude(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid magnitude '{s}': {e}"))
}
