//! Q16 reciprocal square root anchors at powers of two.

/// `RSQRT_TABLE[i] ≈ 2^16 / sqrt(2^i)`, within one unit of the exact value.
///
/// Entry 0 would be exactly 65536, which does not fit a `u16`; it saturates
/// to 65535. Entries never increase with the index.
pub static RSQRT_TABLE: [u16; 32] = [
    65535, 46341, 32768, 23170, 16384, // 2^0..2^4
    11585, 8192, 5793, 4096, 2896, // 2^5..2^9
    2048, 1448, 1024, 724, 512, // 2^10..2^14
    362, 256, 181, 128, 90, // 2^15..2^19
    64, 45, 32, 23, 16, // 2^20..2^24
    11, 8, 6, 4, 3, // 2^25..2^29
    2, 1, // 2^30, 2^31
];

/// Upper anchor for the top bucket, where `2^32` has no table entry.
/// The smallest positive Q16 value.
pub const TABLE_FALLBACK: u32 = 1;

/// Highest bucket exponent.
pub const MAX_EXPONENT: u32 = 31;

/// `(y0, y1)` anchors bracketing bucket `e`: the estimates at `2^e` and
/// `2^(e+1)`.
#[inline(always)]
pub fn anchors(e: u32) -> (u32, u32) {
    debug_assert!(e <= MAX_EXPONENT);
    let y0 = u32::from(RSQRT_TABLE[e as usize]);
    let y1 = if e < MAX_EXPONENT {
        u32::from(RSQRT_TABLE[e as usize + 1])
    } else {
        TABLE_FALLBACK
    };
    (y0, y1)
}
