//! Accuracy envelopes for estimates.
//!
//! An estimate `y` of `E = 2^16 / sqrt(x)` is accepted when
//!
//! ```text
//! |y - E| <= relative * E + units
//! ```
//!
//! The unit term absorbs Q16 quantization: for large `x` the exact value is a
//! handful of units and no relative bound below 1 unit is achievable.
//!
//! The check squares both sides instead of taking a square root, so it is
//! exact integer arithmetic and works in `no_std`.

use crate::estimate::RsqrtConfig;

/// Error envelope: `relative_ppm` parts per million of the exact value plus
/// `units` Q16 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBound {
    pub relative_ppm: u32,
    pub units: u32,
}

const PPM: u128 = 1_000_000;

impl ErrorBound {
    /// Two or more Newton passes.
    pub const REFINED: ErrorBound = ErrorBound {
        relative_ppm: 100,
        units: 2,
    };

    /// One Newton pass.
    pub const SINGLE_PASS: ErrorBound = ErrorBound {
        relative_ppm: 5_000,
        units: 2,
    };

    /// Interpolation only.
    pub const SEED: ErrorBound = ErrorBound {
        relative_ppm: 50_000,
        units: 2,
    };

    /// Envelope that every estimate made with `config` stays inside,
    /// regardless of rounding mode or multiplier.
    pub const fn for_config(config: RsqrtConfig) -> ErrorBound {
        match config.passes {
            0 => ErrorBound::SEED,
            1 => ErrorBound::SINGLE_PASS,
            _ => ErrorBound::REFINED,
        }
    }

    /// Whether `estimate` is within this envelope of `2^16 / sqrt(x)`.
    ///
    /// For `x == 0` only an estimate of 0 is accepted.
    pub fn allows(&self, x: u32, estimate: u32) -> bool {
        if x == 0 {
            return estimate == 0;
        }

        let ppm = u128::from(self.relative_ppm);

        // y - u <= E(1 + r)  <=>  (y - u)^2 * x * 10^12 <= 2^32 * (10^6 + ppm)^2
        let upper_ok = match estimate.checked_sub(self.units) {
            None | Some(0) => true,
            Some(over) => match scaled_square(over, x) {
                Some(lhs) => lhs <= ONE_SQ * (PPM + ppm) * (PPM + ppm),
                None => false,
            },
        };

        // y + u >= E(1 - r)  <=>  (y + u)^2 * x * 10^12 >= 2^32 * (10^6 - ppm)^2
        let lower_ok = if ppm >= PPM {
            true
        } else {
            let under = u64::from(estimate) + u64::from(self.units);
            match scaled_square(under, x) {
                Some(lhs) => lhs >= ONE_SQ * (PPM - ppm) * (PPM - ppm),
                None => true,
            }
        };

        upper_ok && lower_ok
    }
}

/// (2^16)^2
const ONE_SQ: u128 = 1 << 32;

/// `v^2 * x * 10^12`, or `None` past `u128`.
fn scaled_square(v: impl Into<u128>, x: u32) -> Option<u128> {
    let v = v.into();
    v.checked_mul(v)?
        .checked_mul(u128::from(x))?
        .checked_mul(PPM * PPM)
}
