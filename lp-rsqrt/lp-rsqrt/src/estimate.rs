//! Public estimator: interpolation seed plus a configured number of passes.

use log::trace;

use crate::clz::clz32;
use crate::interpolate::interpolate;
use crate::mul::{DefaultMultiplier, Multiplier};
use crate::newton::{Rounding, newton_step};

/// Precision/cost settings for [`estimate_with`].
///
/// Every combination is valid. Error envelope over the whole `u32` domain,
/// in Q16 units, with the table in [`crate::table`]:
///
/// | passes | bound                      |
/// |--------|----------------------------|
/// | 0      | 5% of exact + 2 units      |
/// | 1      | 0.5% of exact + 2 units    |
/// | 2+     | 0.01% of exact + 2 units   |
///
/// See [`crate::bounds::ErrorBound::for_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsqrtConfig {
    /// Newton-Raphson passes after interpolation. Zero returns the raw seed.
    pub passes: u8,
    /// Rounding applied inside each pass.
    pub rounding: Rounding,
}

impl RsqrtConfig {
    /// Two passes, round to nearest. The default.
    pub const PRECISE: RsqrtConfig = RsqrtConfig {
        passes: 2,
        rounding: Rounding::Nearest,
    };

    /// One pass, split truncation. Only ever needs 16 x 16 products for the
    /// final shift, matching the narrow single-pass build.
    pub const FAST: RsqrtConfig = RsqrtConfig {
        passes: 1,
        rounding: Rounding::SplitTruncate,
    };

    /// Interpolation only.
    pub const INTERPOLATED: RsqrtConfig = RsqrtConfig {
        passes: 0,
        rounding: Rounding::Nearest,
    };

    /// `passes` refinement passes with `rounding`. Zero passes is valid and
    /// returns the interpolated seed.
    pub const fn new(passes: u8, rounding: Rounding) -> Self {
        RsqrtConfig { passes, rounding }
    }
}

impl Default for RsqrtConfig {
    fn default() -> Self {
        RsqrtConfig::PRECISE
    }
}

/// Q16 estimate of `2^16 / sqrt(x)` using the build's multiplier and
/// [`RsqrtConfig::PRECISE`]. `estimate(0)` is 0.
#[inline]
pub fn estimate(x: u32) -> u32 {
    estimate_with::<DefaultMultiplier>(x, RsqrtConfig::PRECISE)
}

/// Q16 estimate of `2^16 / sqrt(x)` with an explicit multiplier and config.
///
/// Zero has no bucket and maps to 0.
pub fn estimate_with<M: Multiplier>(x: u32, config: RsqrtConfig) -> u32 {
    if x == 0 {
        return 0;
    }

    let mut y = interpolate::<M>(x);
    trace!(
        "rsqrt[{}] x={x} bucket={} seed={y}",
        M::NAME,
        31 - clz32(x)
    );

    for pass in 0..config.passes {
        y = newton_step::<M>(y, x, config.rounding);
        trace!("rsqrt[{}] x={x} pass={pass} y={y}", M::NAME);
    }
    y
}

/// Reciprocal square root estimate (extern C wrapper for firmware and JIT
/// call sites).
///
/// # Arguments
/// * `x` - Unsigned magnitude
///
/// # Returns
/// `2^16 / sqrt(x)` as Q16, 0 for `x == 0`
#[unsafe(no_mangle)]
pub extern "C" fn __lp_q16_rsqrt(x: u32) -> u32 {
    estimate(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mul::{Chunked, Hardware, ShiftAdd};
    use std::string::String;
    use std::sync::Mutex;
    use std::vec::Vec;
    use std::{format, println};

    const SAMPLES: [u32; 10] = [1, 2, 4, 5, 10, 16, 20, 100, 1000, u32::MAX];

    #[test]
    fn test_zero_is_zero() {
        assert_eq!(estimate(0), 0);
        assert_eq!(__lp_q16_rsqrt(0), 0);
        for passes in 0..4 {
            let config = RsqrtConfig::new(passes, Rounding::Truncate);
            assert_eq!(estimate_with::<Chunked>(0, config), 0);
        }
    }

    #[test]
    fn test_known_values() {
        let cases = [
            (1u32, 65536u32),
            (2, 46341),
            (4, 32768),
            (5, 29308),
            (10, 20724),
            (16, 16384),
            (20, 14654),
            (100, 6553),
            (1000, 2072),
            (u32::MAX, 1),
        ];
        for (x, expected) in cases {
            let actual = estimate(x);
            println!("estimate({x}) -> Expected: {expected}, Actual: {actual}");
            assert_eq!(actual, expected, "estimate({x})");
        }
    }

    #[test]
    fn test_fast_config_values() {
        // Outputs of the single-pass narrow C routine for the same inputs
        let cases = [
            (1u32, 65535u32),
            (2, 46341),
            (3, 37718),
            (4, 32768),
            (5, 29249),
            (7, 24731),
            (10, 20683),
            (20, 14624),
            (100, 6533),
            (1000, 2072),
            (65535, 255),
            (65537, 255),
            (123_456_789, 5),
            (0x7FFF_FFFF, 1),
            (u32::MAX, 1),
        ];
        for (x, expected) in cases {
            let actual = estimate_with::<Chunked>(x, RsqrtConfig::FAST);
            println!("fast({x}) -> Expected: {expected}, Actual: {actual}");
            assert_eq!(actual, expected, "fast({x})");
            assert_eq!(estimate_with::<ShiftAdd>(x, RsqrtConfig::FAST), expected);
        }
    }

    #[test]
    fn test_single_pass_rounding_modes_differ() {
        // Same seed and pass count; only the final shift placement differs
        let truncate = RsqrtConfig::new(1, Rounding::Truncate);
        assert_eq!(estimate_with::<ShiftAdd>(5, truncate), 29250);
        assert_eq!(estimate_with::<ShiftAdd>(100, truncate), 6534);
        assert_eq!(estimate_with::<ShiftAdd>(5, RsqrtConfig::FAST), 29249);
        assert_eq!(estimate_with::<ShiftAdd>(100, RsqrtConfig::FAST), 6533);
    }

    #[test]
    fn test_interpolated_config_is_seed() {
        for x in SAMPLES {
            assert_eq!(
                estimate_with::<ShiftAdd>(x, RsqrtConfig::INTERPOLATED),
                interpolate::<ShiftAdd>(x)
            );
        }
    }

    struct CaptureLog;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    impl log::Log for CaptureLog {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            CAPTURED.lock().unwrap().push(format!("{}", record.args()));
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOG: CaptureLog = CaptureLog;

    #[test]
    fn test_trace_reports_bucket() {
        let _ = log::set_logger(&CAPTURE_LOG);
        log::set_max_level(log::LevelFilter::Trace);

        estimate_with::<ShiftAdd>(1000, RsqrtConfig::PRECISE);
        estimate_with::<Chunked>(0xC000_0000, RsqrtConfig::FAST);

        let lines = CAPTURED.lock().unwrap();
        assert!(
            lines.iter().any(|l| l.starts_with("rsqrt[shift-add] x=1000 bucket=9 seed=")),
            "{lines:?}"
        );
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("rsqrt[chunked] x=3221225472 bucket=31 seed=")),
            "{lines:?}"
        );
    }

    #[test]
    fn test_default_config_is_precise() {
        assert_eq!(RsqrtConfig::default(), RsqrtConfig::PRECISE);
        for x in SAMPLES {
            assert_eq!(estimate(x), estimate_with::<Hardware>(x, RsqrtConfig::default()));
            assert_eq!(__lp_q16_rsqrt(x), estimate(x));
        }
    }

    #[test]
    fn test_extra_passes_converge() {
        // Beyond two passes the estimate settles within a unit
        for x in SAMPLES {
            let two = estimate_with::<ShiftAdd>(x, RsqrtConfig::new(2, Rounding::Nearest));
            let four = estimate_with::<ShiftAdd>(x, RsqrtConfig::new(4, Rounding::Nearest));
            assert!(two.abs_diff(four) <= 1, "x={x}: {two} vs {four}");
        }
    }
}
