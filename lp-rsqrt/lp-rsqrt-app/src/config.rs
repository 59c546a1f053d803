//! Harness configuration: TOML file merged with command-line flags.
//!
//! ```toml
//! digits = 4
//! samples = [1, 2, 4, 100]
//!
//! [estimator]
//! passes = 2
//! rounding = "nearest"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lp_rsqrt::RsqrtConfig;
use serde::{Deserialize, Serialize};

use crate::args::Cli;

/// Magnitudes printed when none are given: powers of two, values between
/// buckets, and the top of the domain.
pub const SAMPLE_VECTOR: [u32; 10] = [1, 2, 4, 5, 10, 16, 20, 100, 1000, u32::MAX];

/// Fractional digits printed by default.
pub const DEFAULT_DIGITS: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub estimator: RsqrtConfig,
    pub digits: u8,
    pub samples: Vec<u32>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            estimator: RsqrtConfig::default(),
            digits: DEFAULT_DIGITS,
            samples: SAMPLE_VECTOR.to_vec(),
        }
    }
}

impl HarnessConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse harness config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Config file (if any) with command-line flags applied on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(passes) = cli.passes {
            config.estimator.passes = passes;
        }
        if let Some(rounding) = cli.rounding {
            config.estimator.rounding = rounding.into();
        }
        if let Some(digits) = cli.digits {
            config.digits = digits;
        }
        if !cli.values.is_empty() {
            config.samples = cli.values.clone();
        }
        Ok(config)
    }
}
