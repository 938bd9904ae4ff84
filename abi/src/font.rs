//! Glyph tables.
//!
//! Two independent tables: the 18-entry numeric set indexed by
//! [`Digit`](crate::Digit) codes, and a 128-entry ASCII set for general text.
//! Both are read-only constant data.

use crate::segments::*;

/// Number of characters in the default ASCII character set.
pub const NUM_CHAR_PATTERNS: usize = 128;

/// Segment patterns for the digit character set: 0-F, space, minus.
pub const DIGIT_PATTERNS: [u8; 18] = [
    PATTERN_0,
    PATTERN_1,
    PATTERN_2,
    PATTERN_3,
    PATTERN_4,
    PATTERN_5,
    PATTERN_6,
    PATTERN_7,
    PATTERN_8,
    PATTERN_9,
    PATTERN_A,
    PATTERN_B,
    PATTERN_C,
    PATTERN_D,
    PATTERN_E,
    PATTERN_F,
    PATTERN_SPACE,
    PATTERN_MINUS,
];

const U: u8 = PATTERN_UNKNOWN;

/// Segment patterns for ASCII 0-127. Control characters and DEL are blank.
#[rustfmt::skip]
pub const CHAR_PATTERNS: [u8; NUM_CHAR_PATTERNS] = [
    U, U, U, U, U, U, U, U, // 0x00
    U, U, U, U, U, U, U, U, // 0x08
    U, U, U, U, U, U, U, U, // 0x10
    U, U, U, U, U, U, U, U, // 0x18
    0b0000_0000, /* (space) */
    0b1000_0110, /* ! */
    0b0010_0010, /* " */
    0b0111_1110, /* # */
    0b0110_1101, /* $ */
    0b1101_0010, /* % */
    0b0100_0110, /* & */
    0b0010_0000, /* ' */
    0b0010_1001, /* ( */
    0b0000_1011, /* ) */
    0b0010_0001, /* * */
    0b0111_0000, /* + */
    0b0001_0000, /* , */
    0b0100_0000, /* - */
    0b1000_0000, /* . */
    0b0101_0010, /* / */
    0b0011_1111, /* 0 */
    0b0000_0110, /* 1 */
    0b0101_1011, /* 2 */
    0b0100_1111, /* 3 */
    0b0110_0110, /* 4 */
    0b0110_1101, /* 5 */
    0b0111_1101, /* 6 */
    0b0000_0111, /* 7 */
    0b0111_1111, /* 8 */
    0b0110_1111, /* 9 */
    0b0000_1001, /* : */
    0b0000_1101, /* ; */
    0b0110_0001, /* < */
    0b0100_1000, /* = */
    0b0100_0011, /* > */
    0b1101_0011, /* ? */
    0b0101_1111, /* @ */
    0b0111_0111, /* A */
    0b0111_1100, /* B */
    0b0011_1001, /* C */
    0b0101_1110, /* D */
    0b0111_1001, /* E */
    0b0111_0001, /* F */
    0b0011_1101, /* G */
    0b0111_0110, /* H */
    0b0011_0000, /* I */
    0b0001_1110, /* J */
    0b0111_0101, /* K */
    0b0011_1000, /* L */
    0b0001_0101, /* M */
    0b0011_0111, /* N */
    0b0011_1111, /* O */
    0b0111_0011, /* P */
    0b0110_1011, /* Q */
    0b0011_0011, /* R */
    0b0110_1101, /* S */
    0b0111_1000, /* T */
    0b0011_1110, /* U */
    0b0011_1110, /* V */
    0b0010_1010, /* W */
    0b0111_0110, /* X */
    0b0110_1110, /* Y */
    0b0101_1011, /* Z */
    0b0011_1001, /* [ */
    0b0110_0100, /* \ */
    0b0000_1111, /* ] */
    0b0010_0011, /* ^ */
    0b0000_1000, /* _ */
    0b0000_0010, /* ` */
    0b0101_1111, /* a */
    0b0111_1100, /* b */
    0b0101_1000, /* c */
    0b0101_1110, /* d */
    0b0111_1011, /* e */
    0b0111_0001, /* f */
    0b0110_1111, /* g */
    0b0111_0100, /* h */
    0b0001_0000, /* i */
    0b0000_1100, /* j */
    0b0111_0101, /* k */
    0b0011_0000, /* l */
    0b0001_0100, /* m */
    0b0101_0100, /* n */
    0b0101_1100, /* o */
    0b0111_0011, /* p */
    0b0110_0111, /* q */
    0b0101_0000, /* r */
    0b0110_1101, /* s */
    0b0111_1000, /* t */
    0b0001_1100, /* u */
    0b0001_1100, /* v */
    0b0001_0100, /* w */
    0b0111_0110, /* x */
    0b0110_1110, /* y */
    0b0101_1011, /* z */
    0b0100_0110, /* { */
    0b0011_0000, /* | */
    0b0111_0000, /* } */
    0b0000_0001, /* ~ */
    U,           /* (del) */
];

/// A read-only character-code to segment-pattern table.
///
/// Codes at or past the end of the table map to [`PATTERN_UNKNOWN`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable<'a> {
    patterns: &'a [u8],
}

impl GlyphTable<'static> {
    /// The default 128-entry ASCII font.
    pub const ASCII: Self = Self {
        patterns: &CHAR_PATTERNS,
    };
}

impl Default for GlyphTable<'static> {
    fn default() -> Self {
        Self::ASCII
    }
}

impl<'a> GlyphTable<'a> {
    /// Wrap a caller font. Returns `None` for an empty table or one with more
    /// entries than an 8-bit code can address.
    pub fn new(patterns: &'a [u8]) -> Option<Self> {
        if patterns.is_empty() || patterns.len() > 256 {
            return None;
        }
        Some(Self { patterns })
    }

    /// Number of characters in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Segment pattern for `code`.
    #[inline]
    pub fn pattern(&self, code: u8) -> u8 {
        self.patterns
            .get(code as usize)
            .copied()
            .unwrap_or(PATTERN_UNKNOWN)
    }

    /// Segment pattern for a Unicode scalar; non-8-bit characters are unknown.
    #[inline]
    pub fn pattern_for_char(&self, c: char) -> u8 {
        match u8::try_from(c) {
            Ok(code) => self.pattern(code),
            Err(_) => PATTERN_UNKNOWN,
        }
    }
}
