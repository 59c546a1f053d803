//! Q16 reciprocal square root estimation for cores without a multiplier.
//!
//! This crate computes `2^16 / sqrt(x)` for an unsigned 32-bit magnitude using
//! only additions, shifts and table lookups, so it runs on RV32I targets that
//! lack the M extension. The pipeline is:
//! - Locate the power-of-two bucket of `x` ([`clz`])
//! - Interpolate between adjacent entries of a 32-entry estimate table
//!   ([`table`], [`interpolate`])
//! - Refine with fixed-point Newton-Raphson passes ([`newton`])
//!
//! Products are formed through a [`mul::Multiplier`] selected at build time:
//! a wide shift-add loop (default), a chunked multiplier that never multiplies
//! anything wider than 16 bits (`narrow-mul`), or the native multiply
//! instruction (`hw-mul`). All three are exact, so results are bit-identical.
//!
//! ```
//! use lp_rsqrt::{estimate, Q16};
//!
//! assert_eq!(estimate(4), 32768); // 0.5 in Q16
//! assert_eq!(estimate(0), 0);
//! assert_eq!(Q16(estimate(16)).display(4).to_string(), "0.2500");
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod bounds;
pub mod clz;
pub mod estimate;
pub mod fmt;
pub mod interpolate;
pub mod mul;
pub mod newton;
pub mod table;

pub use bounds::ErrorBound;
pub use clz::{bucket_exponent, clz32};
pub use estimate::{RsqrtConfig, __lp_q16_rsqrt, estimate, estimate_with};
pub use fmt::{Q16, Q16Display};
pub use mul::{Chunked, DefaultMultiplier, Hardware, Multiplier, ShiftAdd};
pub use newton::Rounding;

/// Number of fractional bits in the Q16 format.
pub const Q16_SHIFT: u32 = 16;

/// 1.0 in Q16.
pub const Q16_ONE: u32 = 1 << Q16_SHIFT;
