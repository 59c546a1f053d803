//! Portable leading-zero count.
//!
//! RV32I has no `clz` instruction, and `u32::leading_zeros` lowers to a libcall
//! there. This version narrows the search window by halves instead.

/// Count leading zero bits of `x`. Returns 32 for zero.
#[inline(always)]
pub const fn clz32(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }

    let mut x = x;
    let mut n = 0;
    if x >> 16 == 0 {
        n += 16;
        x <<= 16;
    }
    if x >> 24 == 0 {
        n += 8;
        x <<= 8;
    }
    if x >> 28 == 0 {
        n += 4;
        x <<= 4;
    }
    if x >> 30 == 0 {
        n += 2;
        x <<= 2;
    }
    if x >> 31 == 0 {
        n += 1;
    }
    n
}

/// Exponent `e` such that `x` lies in `[2^e, 2^(e+1))`, or `None` for zero.
#[inline(always)]
pub const fn bucket_exponent(x: u32) -> Option<u32> {
    match clz32(x) {
        32 => None,
        lz => Some(31 - lz),
    }
}
