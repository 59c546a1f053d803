//! Fixed-point Newton-Raphson refinement for `1/sqrt(x)`.
//!
//! ## Iteration
//!
//! ```text
//! y' = y * (3 - x*y^2) / 2
//! ```
//!
//! In Q16, with `x` an integer magnitude and `y` a Q16 estimate:
//!
//! ```text
//! y2    = y * y                          Q32, double width
//! xy2   = (x * y2) >> 16                 Q16, ~1.0 when y is close
//! term  = (3 << 16) - min(xy2, 3 << 16)  Q16, in [0, 3.0]
//! y'    = (y * term) >> 17               Q16; the /2 is folded into the shift
//! ```
//!
//! `y2` is split into high and low words; `x * y2_lo` goes through
//! [`mul_shr16`] and `x * y2_hi` only matters while it is at most 3.
//!
//! ## Rounding
//!
//! The two right shifts above are the only places where bits are dropped.
//! [`Rounding::Nearest`] adds half an ULP before each of them;
//! [`Rounding::Truncate`] drops the bits. [`Rounding::SplitTruncate`] also
//! truncates, but applies the final shift to each half of `term` separately,
//! so `y * term` never needs a full-width product:
//!
//! ```text
//! y' = ((y * term_hi) >> 1) + ((y * term_lo) >> 17)    term_hi in 0..=3
//! ```
//!
//! Nearest is the reference behaviour: truncation biases every pass
//! downwards by up to one unit, split truncation by up to two.

use crate::mul::{Multiplier, mul_shr16, split_halves};

/// Where the refinement drops low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Rounding {
    /// Add half an ULP before each truncating shift.
    #[default]
    Nearest,
    /// Plain truncation. Cheaper by two adds per pass.
    Truncate,
    /// Truncation with the final shift split over the halves of `term`.
    /// The high half is a multiple of `y` by at most 3, done with shifts.
    SplitTruncate,
}

impl Rounding {
    /// Bias added before `>> 16` when forming `x*y^2`.
    #[inline(always)]
    const fn bias_shr16(self) -> u32 {
        match self {
            Rounding::Nearest => 1 << 15,
            Rounding::Truncate | Rounding::SplitTruncate => 0,
        }
    }

    /// Bias added before the final `>> 17`.
    #[inline(always)]
    const fn bias_shr17(self) -> u64 {
        match self {
            Rounding::Nearest => 1 << 16,
            Rounding::Truncate | Rounding::SplitTruncate => 0,
        }
    }
}

/// 3.0 in Q16.
const THREE: u32 = 3 << 16;

/// One Newton-Raphson pass on the Q16 estimate `y` of `1/sqrt(x)`.
///
/// Any 32-bit `y` is accepted. An estimate far enough above `1/sqrt(x)` that
/// `x*y^2` reaches 3.0 collapses to 0 rather than wrapping.
#[inline]
pub fn newton_step<M: Multiplier>(y: u32, x: u32, rounding: Rounding) -> u32 {
    let term = THREE - x_y_squared::<M>(y, x, rounding.bias_shr16());

    let next = match rounding {
        Rounding::SplitTruncate => split_final_shift::<M>(y, term),
        Rounding::Nearest | Rounding::Truncate => {
            (M::widening_mul(y, term) + rounding.bias_shr17()) >> 17
        }
    };

    // For x >= 1, term > 0 implies y < 2^16 * sqrt(3), so next < 2^18.
    // Only x = 0 can grow y past a word.
    u32::try_from(next).unwrap_or(u32::MAX)
}

/// `min((x * y^2 + bias) >> 16, 3 << 16)` with `y^2` at full width.
#[inline(always)]
fn x_y_squared<M: Multiplier>(y: u32, x: u32, bias: u32) -> u32 {
    let y2 = M::widening_mul(y, y);
    let y2_hi = (y2 >> 32) as u32;
    let y2_lo = y2 as u32;

    // (x * y2_hi) << 16 alone reaches 3.0 once x * y2_hi > 3
    let hi = if y2_hi == 0 {
        0
    } else {
        M::widening_mul(x, y2_hi)
    };
    if hi > 3 {
        return THREE;
    }

    let xy2 = (hi << 16) + mul_shr16::<M>(x, y2_lo, bias);
    if xy2 > u64::from(THREE) {
        THREE
    } else {
        xy2 as u32
    }
}

/// `((y * term_hi) >> 1) + ((y * term_lo) >> 17)`, both halves truncated.
#[inline(always)]
fn split_final_shift<M: Multiplier>(y: u32, term: u32) -> u64 {
    let (term_hi, term_lo) = split_halves(term);
    let wide_y = u64::from(y);

    // term <= 3 << 16
    let y_hi = match term_hi {
        3 => (wide_y << 1) + wide_y,
        2 => wide_y << 1,
        1 => wide_y,
        _ => 0,
    };
    (y_hi >> 1) + (M::widening_mul(y, term_lo) >> 17)
}
