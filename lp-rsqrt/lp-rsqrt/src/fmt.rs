//! Decimal rendering of Q16 values without division.
//!
//! The integer part goes through `core::fmt`. Fraction digits are produced by
//! repeatedly multiplying the low 16 bits by ten, as `(f << 3) + (f << 1)`,
//! and taking whatever carries into bit 16 as the next digit. Digits are
//! truncated, not rounded.

use core::fmt;

/// Unsigned Q16 fixed-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q16(pub u32);

impl Q16 {
    pub const ZERO: Q16 = Q16(0);
    pub const ONE: Q16 = Q16(crate::Q16_ONE);

    #[inline(always)]
    pub const fn integer_part(self) -> u32 {
        self.0 >> 16
    }

    /// Low 16 bits, the fraction in units of 2^-16.
    #[inline(always)]
    pub const fn fraction_bits(self) -> u32 {
        self.0 & 0xFFFF
    }

    /// Display adapter with `digits` fractional digits.
    pub const fn display(self, digits: u8) -> Q16Display {
        Q16Display {
            value: self,
            digits,
        }
    }
}

impl From<u32> for Q16 {
    fn from(raw: u32) -> Self {
        Q16(raw)
    }
}

/// `<integer>.<digits>` rendering of a [`Q16`]. No decimal point when
/// `digits` is zero.
#[derive(Debug, Clone, Copy)]
pub struct Q16Display {
    pub value: Q16,
    pub digits: u8,
}

impl fmt::Display for Q16Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.integer_part())?;
        if self.digits == 0 {
            return Ok(());
        }

        f.write_str(".")?;
        let mut frac = self.value.fraction_bits();
        for _ in 0..self.digits {
            let frac10 = (frac << 3) + (frac << 1);
            let digit = frac10 >> 16;
            frac = frac10 & 0xFFFF;
            // digit < 10
            let ch = char::from(b'0' + digit as u8);
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl fmt::Display for Q16 {
    /// Five fractional digits, enough to tell adjacent Q16 values apart.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(5), f)
    }
}
