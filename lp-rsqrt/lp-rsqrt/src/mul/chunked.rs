//! Chunked multiplier built only from 16 x 16 products.

use super::{HALF_MASK, Multiplier, split_halves};

/// Multiplier that never forms a product wider than one native word.
///
/// The 16 x 16 primitive consumes `b` four bits at a time: each nibble selects
/// some of `a`, `a<<1`, `a<<2`, `a<<3`, and the sum is shifted into place.
/// That is four conditional adds per nibble and no data-dependent loop.
///
/// Full-width products are assembled from four half-width partial products.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chunked;

impl Multiplier for Chunked {
    const NAME: &'static str = "chunked";

    fn widening_mul(a: u32, b: u32) -> u64 {
        let (ah, al) = split_halves(a);
        let (bh, bl) = split_halves(b);

        let hh = u64::from(Self::mul_half(ah, bh));
        let hl = u64::from(Self::mul_half(ah, bl));
        let lh = u64::from(Self::mul_half(al, bh));
        let ll = u64::from(Self::mul_half(al, bl));

        (hh << 32) + ((hl + lh) << 16) + ll
    }

    #[inline]
    fn mul_half(a: u32, b: u32) -> u32 {
        debug_assert!(a <= HALF_MASK && b <= HALF_MASK, "mul_half({a:#x}, {b:#x})");
        let a = a & HALF_MASK;
        let mut acc = 0u32;
        let mut shift = 0;
        while shift < 16 {
            let nibble = (b >> shift) & 0xF;
            let mut partial = 0u32;
            if nibble & 1 != 0 {
                partial += a;
            }
            if nibble & 2 != 0 {
                partial += a << 1;
            }
            if nibble & 4 != 0 {
                partial += a << 2;
            }
            if nibble & 8 != 0 {
                partial += a << 3;
            }
            acc += partial << shift;
            shift += 4;
        }
        acc
    }
}
