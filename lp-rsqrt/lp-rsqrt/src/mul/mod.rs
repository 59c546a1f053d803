//! Multiplication primitives.
//!
//! The estimator needs exactly two kinds of product:
//! - `mul_half`: 16 x 16 -> 32, always fits a native word
//! - `widening_mul`: 32 x 32 -> 64
//!
//! Everything wider than a half-width product is assembled from these by the
//! helpers in this module. Implementations differ only in cost; every one of
//! them must return the exact mathematical product, so estimates do not depend
//! on which multiplier a build selects.
//!
//! ## Selection
//!
//! | feature      | multiplier   | when to use                              |
//! |--------------|--------------|------------------------------------------|
//! | (none)       | [`ShiftAdd`] | RV32I, 64-bit adds are cheap             |
//! | `narrow-mul` | [`Chunked`]  | only 16-bit products are affordable      |
//! | `hw-mul`     | [`Hardware`] | target has a multiplier (e.g. RV32IM)    |
//!
//! `hw-mul` wins if both features are enabled.

mod chunked;
mod hardware;
mod shift_add;

pub use chunked::Chunked;
pub use hardware::Hardware;
pub use shift_add::ShiftAdd;

/// Multiplier used by [`crate::estimate`].
#[cfg(feature = "hw-mul")]
pub type DefaultMultiplier = Hardware;

/// Multiplier used by [`crate::estimate`].
#[cfg(all(feature = "narrow-mul", not(feature = "hw-mul")))]
pub type DefaultMultiplier = Chunked;

/// Multiplier used by [`crate::estimate`].
#[cfg(not(any(feature = "narrow-mul", feature = "hw-mul")))]
pub type DefaultMultiplier = ShiftAdd;

/// Exact integer multiplication strategy.
pub trait Multiplier {
    /// Short name for logs and reports.
    const NAME: &'static str;

    /// Exact double-width product `a * b`.
    fn widening_mul(a: u32, b: u32) -> u64;

    /// Exact product of two operands no wider than 16 bits.
    #[inline(always)]
    fn mul_half(a: u32, b: u32) -> u32 {
        debug_assert!(a <= HALF_MASK && b <= HALF_MASK, "mul_half({a:#x}, {b:#x})");
        Self::widening_mul(a, b) as u32
    }
}

pub(crate) const HALF_MASK: u32 = 0xFFFF;

/// Split a word into its `(high, low)` 16-bit halves.
#[inline(always)]
pub const fn split_halves(v: u32) -> (u32, u32) {
    (v >> 16, v & HALF_MASK)
}

/// `(a * b + bias) >> 16` built from four half-width products.
///
/// With `a = ah*2^16 + al` and `b = bh*2^16 + bl`:
///
/// ```text
/// (a*b + bias) >> 16 = (ah*bh << 16) + ah*bl + al*bh + ((al*bl + bias) >> 16)
/// ```
///
/// The first three terms are multiples of 2^16 before the shift, so the
/// result is exact. `bias` must be below 2^16; `al*bl + bias` then stays
/// inside a native word. The result is below 2^48.
#[inline(always)]
pub fn mul_shr16<M: Multiplier>(a: u32, b: u32, bias: u32) -> u64 {
    debug_assert!(bias <= HALF_MASK);
    let (ah, al) = split_halves(a);
    let (bh, bl) = split_halves(b);

    let mut acc = u64::from(M::mul_half(ah, bh)) << 16;
    acc += u64::from(M::mul_half(ah, bl));
    acc += u64::from(M::mul_half(al, bh));
    acc += u64::from((M::mul_half(al, bl) + bias) >> 16);
    acc
}
