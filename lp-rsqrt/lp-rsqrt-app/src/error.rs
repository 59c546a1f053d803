//! Error types for lp-rsqrt-app

use core::fmt;

use lp_rsqrt::ErrorBound;

/// Harness failures that are not I/O or parse errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// `--check` found estimates outside their error bound
    OutOfBounds {
        failed: Vec<u32>,
        checked: usize,
        bound: ErrorBound,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::OutOfBounds {
                failed,
                checked,
                bound,
            } => {
                write!(
                    f,
                    "{} of {checked} estimates outside {} ppm + {} units: x = {failed:?}",
                    failed.len(),
                    bound.relative_ppm,
                    bound.units
                )
            }
        }
    }
}

impl std::error::Error for HarnessError {}
