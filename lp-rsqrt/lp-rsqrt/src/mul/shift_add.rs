//! Wide shift-and-add multiplier.

use super::Multiplier;

/// Classic shift-and-add: walk the bits of `b`, adding a shifted copy of `a`
/// into a 64-bit accumulator for every set bit.
///
/// At most 32 iterations. On RV32I the 64-bit add and shift are a handful of
/// base instructions each, so this is the default when no multiplier exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftAdd;

impl Multiplier for ShiftAdd {
    const NAME: &'static str = "shift-add";

    #[inline]
    fn widening_mul(a: u32, b: u32) -> u64 {
        let mut acc = 0u64;
        let mut addend = u64::from(a);
        let mut b = b;
        while b != 0 {
            if b & 1 != 0 {
                acc += addend;
            }
            addend <<= 1;
            b >>= 1;
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_add_small() {
        assert_eq!(ShiftAdd::widening_mul(0, 12345), 0);
        assert_eq!(ShiftAdd::widening_mul(12345, 0), 0);
        assert_eq!(ShiftAdd::widening_mul(7, 6), 42);
        assert_eq!(ShiftAdd::mul_half(0xFFFF, 0xFFFF), 0xFFFE_0001);
    }

    #[test]
    fn test_shift_add_full_width() {
        assert_eq!(
            ShiftAdd::widening_mul(u32::MAX, u32::MAX),
            0xFFFF_FFFE_0000_0001
        );
        assert_eq!(ShiftAdd::widening_mul(0x8000_0000, 2), 1 << 32);
    }
}
