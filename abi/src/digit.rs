//! Numeric digit codes.
//!
//! The writers do not format numbers through ASCII. They use a restricted
//! 18-symbol code space that indexes [`DIGIT_PATTERNS`](crate::DIGIT_PATTERNS)
//! directly:
//!
//! - `0..=9`   decimal digits
//! - `10..=15` hex digits A-F
//! - `16`      space
//! - `17`      minus

use crate::font::DIGIT_PATTERNS;

/// Total number of codes in the digit character set.
pub const NUM_DIGIT_PATTERNS: u8 = 18;

/// A code in the digit character set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Digit(pub u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const SPACE: Self = Self(16);
    pub const MINUS: Self = Self(17);

    /// The low nibble of `value` as a hex digit.
    #[inline]
    pub const fn from_nibble(value: u8) -> Self {
        Self(value & 0x0F)
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < NUM_DIGIT_PATTERNS
    }

    /// Substitute [`Digit::SPACE`] for codes outside the character set.
    #[inline]
    pub const fn or_space(self) -> Self {
        if self.is_valid() { self } else { Self::SPACE }
    }

    /// Segment pattern for this code. Invalid codes render as a space.
    #[inline]
    pub const fn pattern(self) -> u8 {
        DIGIT_PATTERNS[self.or_space().0 as usize]
    }

    /// Map one character of a rendered number to a digit code.
    ///
    /// Only `'0'..='9'` and `'-'` have a code; everything else, a space
    /// included, maps to [`Digit::SPACE`]. The caller deals with `'.'`.
    #[inline]
    pub const fn from_ascii(c: u8) -> Self {
        match c {
            b'0'..=b'9' => Self(c - b'0'),
            b'-' => Self::MINUS,
            _ => Self::SPACE,
        }
    }
}
