//! Native multiply instruction.

use super::{HALF_MASK, Multiplier};

/// Plain `*`. Only worth selecting on targets with a multiplier (RV32IM and
/// up, every host). Tests also use it as the exact reference for the
/// software strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hardware;

impl Multiplier for Hardware {
    const NAME: &'static str = "hardware";

    #[inline(always)]
    fn widening_mul(a: u32, b: u32) -> u64 {
        u64::from(a) * u64::from(b)
    }

    #[inline(always)]
    fn mul_half(a: u32, b: u32) -> u32 {
        debug_assert!(a <= HALF_MASK && b <= HALF_MASK, "mul_half({a:#x}, {b:#x})");
        a * b
    }
}
