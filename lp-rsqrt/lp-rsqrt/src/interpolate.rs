//! Bucket selection and linear interpolation between table anchors.
//!
//! For `x` in `[2^e, 2^(e+1))` the seed estimate is the chord between
//! `RSQRT_TABLE[e]` and `RSQRT_TABLE[e+1]`:
//!
//! ```text
//! frac = ((x - 2^e) << 16) >> e          in [0, 2^16)
//! y    = y0 - (((y0 - y1) * frac) >> 16)
//! ```
//!
//! `1/sqrt` is convex, so the chord sits above the curve and the seed
//! overestimates by up to ~4.6% mid-bucket. Newton passes remove that.

use crate::clz::clz32;
use crate::mul::Multiplier;
use crate::table::anchors;

/// Position of `x` inside bucket `e`, as a 16-bit fraction.
///
/// Equivalent to `((x - 2^e) << 16) >> e` evaluated at infinite width. The
/// difference is shifted right when `e >= 16` and left otherwise, so neither
/// direction can overflow a native word.
#[inline(always)]
pub fn bucket_fraction(x: u32, e: u32) -> u32 {
    debug_assert!(e <= 31 && x >> e == 1, "x={x:#x} not in bucket {e}");
    let diff = x - (1u32 << e);
    if e >= 16 {
        diff >> (e - 16)
    } else {
        diff << (16 - e)
    }
}

/// Seed estimate for nonzero `x`, in Q16.
#[inline]
pub fn interpolate<M: Multiplier>(x: u32) -> u32 {
    debug_assert!(x != 0);
    let e = 31 - clz32(x);
    let (y0, y1) = anchors(e);
    let frac = bucket_fraction(x, e);

    // y0 - y1 <= 19194 and frac < 2^16: a half-width product
    let dy = y0 - y1;
    y0 - (M::mul_half(dy, frac) >> 16)
}
