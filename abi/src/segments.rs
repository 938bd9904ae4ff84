//! Segment bit definitions and commonly used patterns.

use bitflags::bitflags;

bitflags! {
    /// Seven-segment cell bits.
    ///
    /// Bits 0-6 select the lit segments, bit 7 is the decimal point. Clock
    /// modules usually wire the colon to the decimal point of one cell.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use ledseg_abi::Segments;
    ///
    /// let one = Segments::B | Segments::C;
    /// assert_eq!(one.bits(), ledseg_abi::PATTERN_1);
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Segments: u8 {
        /// Top (bit 0).
        const A  = 1 << 0;
        /// Upper right (bit 1).
        const B  = 1 << 1;
        /// Lower right (bit 2).
        const C  = 1 << 2;
        /// Bottom (bit 3).
        const D  = 1 << 3;
        /// Lower left (bit 4).
        const E  = 1 << 4;
        /// Upper left (bit 5).
        const F  = 1 << 5;
        /// Middle (bit 6).
        const G  = 1 << 6;
        /// Decimal point or colon (bit 7).
        const DP = 1 << 7;

        // =====================================================================
        // Convenience Combinations
        // =====================================================================

        /// All seven glyph segments, decimal point excluded.
        const GLYPH = 0x7F;
        /// Left vertical bar (E | F), one half step of a level meter.
        const LEFT_BAR = Self::E.bits() | Self::F.bits();
        /// Right vertical bar (B | C).
        const RIGHT_BAR = Self::B.bits() | Self::C.bits();
    }
}

impl Segments {
    /// Return `pattern` with the decimal point bit forced to `state`,
    /// leaving the glyph bits untouched.
    #[inline]
    pub const fn with_decimal_point(pattern: u8, state: bool) -> u8 {
        if state {
            pattern | Self::DP.bits()
        } else {
            pattern & !Self::DP.bits()
        }
    }

    /// True if the decimal point bit of `pattern` is set.
    #[inline]
    pub const fn has_decimal_point(pattern: u8) -> bool {
        pattern & Self::DP.bits() != 0
    }
}

// =============================================================================
// Patterns
// =============================================================================

/// Digit 0
pub const PATTERN_0: u8 = 0b0011_1111;
/// Digit 1
pub const PATTERN_1: u8 = 0b0000_0110;
/// Digit 2
pub const PATTERN_2: u8 = 0b0101_1011;
/// Digit 3
pub const PATTERN_3: u8 = 0b0100_1111;
/// Digit 4
pub const PATTERN_4: u8 = 0b0110_0110;
/// Digit 5
pub const PATTERN_5: u8 = 0b0110_1101;
/// Digit 6
pub const PATTERN_6: u8 = 0b0111_1101;
/// Digit 7
pub const PATTERN_7: u8 = 0b0000_0111;
/// Digit 8
pub const PATTERN_8: u8 = 0b0111_1111;
/// Digit 9
pub const PATTERN_9: u8 = 0b0110_1111;
/// Hex A, also the "A" of "AM".
pub const PATTERN_A: u8 = 0b0111_0111;
/// Hex b
pub const PATTERN_B: u8 = 0b0111_1100;
/// Hex C, also the Celsius unit.
pub const PATTERN_C: u8 = 0b0011_1001;
/// Hex d
pub const PATTERN_D: u8 = 0b0101_1110;
/// Hex E
pub const PATTERN_E: u8 = 0b0111_1001;
/// Hex F, also the Fahrenheit unit.
pub const PATTERN_F: u8 = 0b0111_0001;
/// All segments off.
pub const PATTERN_SPACE: u8 = 0b0000_0000;
/// Middle bar.
pub const PATTERN_MINUS: u8 = 0b0100_0000;
/// Superscript degree symbol.
pub const PATTERN_DEG: u8 = 0b0110_0011;
/// The "P" of "PM".
pub const PATTERN_P: u8 = 0b0111_0011;
/// Lone decimal point, used when a '.' has no cell to attach to.
pub const PATTERN_PERIOD: u8 = Segments::DP.bits();

/// Pattern shown for characters outside the glyph table.
///
/// Blank rather than '?', which renders poorly on modules without a decimal
/// point on every cell. Bit-identical to [`PATTERN_SPACE`].
pub const PATTERN_UNKNOWN: u8 = PATTERN_SPACE;

/// Level meter cell with only the left half lit.
pub const PATTERN_LEVEL_LEFT: u8 = Segments::LEFT_BAR.bits();
/// Level meter cell with only the right half lit.
pub const PATTERN_LEVEL_RIGHT: u8 = Segments::RIGHT_BAR.bits();
/// Level meter cell fully lit.
pub const PATTERN_LEVEL_BOTH: u8 = Segments::LEFT_BAR.bits() | Segments::RIGHT_BAR.bits();
