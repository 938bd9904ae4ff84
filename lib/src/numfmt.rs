//! Stack-only number decomposition for `no_std` contexts.
//!
//! Integers are broken into [`Digit`] codes rather than ASCII so the writers
//! can index the digit glyph table directly. Every function writes into a
//! caller-provided buffer or returns a fixed-size array. No heap, no
//! allocator, no raw pointers.
//!
//! # Typed wrappers
//!
//! [`DecimalBuf`] encapsulates a correctly-sized stack buffer so callers
//! don't need to compute buffer lengths themselves:
//!
//! ```ignore
//! let mut buf = DecimalBuf::new();
//! let digits = buf.signed(-42); // [MINUS, 4, 2]
//! ```
//!
//! Floats go through `core::fmt` into a [`StackFmt`], which stands in for the
//! numeric-to-text converter; the writers then stream its ASCII output.

use core::fmt::{self, Write};

use ledseg_abi::Digit;

/// Scratch length for any `i16`/`u16`: a sign plus five digits.
pub const DECIMAL_BUF_LEN: usize = 6;

/// Largest precision accepted by [`format_float`].
pub const MAX_FLOAT_PRECISION: u8 = 7;

/// Enough for `-FLOAT_OVERFLOW_LIMIT` with [`MAX_FLOAT_PRECISION`] fraction
/// digits.
pub const FLOAT_BUF_LEN: usize = 48;

/// Largest magnitude [`format_float`] renders as digits. Past it the integer
/// part no longer fits 32 bits and the text is `ovf`.
pub const FLOAT_OVERFLOW_LIMIT: f32 = 4_294_967_040.0;

// ---------------------------------------------------------------------------
// Core decomposition functions
// ---------------------------------------------------------------------------

/// Decompose `value` into decimal digit codes at the tail of `buf`.
///
/// Digits are produced least significant first into `buf[len-1]`,
/// `buf[len-2]`, ... so the result needs no reversal pass. Returns the index
/// of the most significant digit; `&buf[start..]` is the number. `buf` must
/// hold at least 5 codes for the full `u16` range; a shorter buffer keeps only
/// the low-order digits.
pub fn to_decimal(value: u16, buf: &mut [Digit]) -> usize {
    let mut pos = buf.len();
    let mut n = value;
    while pos > 0 {
        pos -= 1;
        buf[pos] = Digit((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    pos
}

/// Decompose a signed `value`, prefixing [`Digit::MINUS`] when negative.
///
/// `i16::MIN` has no positive `i16` counterpart; its magnitude is taken as the
/// unsigned 32768. `buf` must hold [`DECIMAL_BUF_LEN`] codes. A shorter
/// buffer keeps only the low-order digits and may lose the minus sign, so
/// debug builds reject it.
pub fn to_signed_decimal(value: i16, buf: &mut [Digit]) -> usize {
    debug_assert!(
        buf.len() >= DECIMAL_BUF_LEN,
        "signed decimal needs {} cells, got {}",
        DECIMAL_BUF_LEN,
        buf.len()
    );
    let mut start = to_decimal(value.unsigned_abs(), buf);
    if value < 0 && start > 0 {
        start -= 1;
        buf[start] = Digit::MINUS;
    }
    start
}

/// Split `value` into tens and ones, or `None` when it needs three digits.
#[inline]
pub const fn split_dec2(value: u8) -> Option<(u8, u8)> {
    if value >= 100 {
        return None;
    }
    let tens = value / 10;
    Some((tens, value - 10 * tens))
}

/// Split `value` into hundreds and the remainder, or `None` past 9999.
#[inline]
pub const fn split_dec4(value: u16) -> Option<(u8, u8)> {
    if value >= 10000 {
        return None;
    }
    let high = value / 100;
    Some((high as u8, (value - high * 100) as u8))
}

/// Two hex digit codes, high nibble first.
#[inline]
pub const fn to_hex_byte(value: u8) -> [Digit; 2] {
    [Digit::from_nibble(value >> 4), Digit::from_nibble(value)]
}

/// Four hex digit codes, high nibble first.
#[inline]
pub const fn to_hex_word(value: u16) -> [Digit; 4] {
    let [hi, lo] = value.to_be_bytes();
    let [a, b] = to_hex_byte(hi);
    let [c, d] = to_hex_byte(lo);
    [a, b, c, d]
}

/// Two BCD digit codes, high nibble first. Nibbles above 9 are not valid BCD
/// and become [`Digit::SPACE`] instead of a hex letter.
#[inline]
pub const fn to_bcd(value: u8) -> [Digit; 2] {
    let [high, low] = to_hex_byte(value);
    [bcd_nibble(high), bcd_nibble(low)]
}

#[inline]
const fn bcd_nibble(d: Digit) -> Digit {
    if d.0 > 9 { Digit::SPACE } else { d }
}

// ---------------------------------------------------------------------------
// DecimalBuf --- typed stack buffer helper
// ---------------------------------------------------------------------------

/// Stack scratch buffer sized for any 16-bit integer.
pub struct DecimalBuf {
    digits: [Digit; DECIMAL_BUF_LEN],
}

impl Default for DecimalBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalBuf {
    #[inline]
    pub const fn new() -> Self {
        Self {
            digits: [Digit::ZERO; DECIMAL_BUF_LEN],
        }
    }

    /// Decompose an unsigned value; returns its digit codes.
    #[inline]
    pub fn unsigned(&mut self, value: u16) -> &[Digit] {
        let start = to_decimal(value, &mut self.digits);
        &self.digits[start..]
    }

    /// Decompose a signed value; returns its digit codes, minus included.
    #[inline]
    pub fn signed(&mut self, value: i16) -> &[Digit] {
        let start = to_signed_decimal(value, &mut self.digits);
        &self.digits[start..]
    }
}

// ---------------------------------------------------------------------------
// StackFmt --- fixed-size fmt::Write sink
// ---------------------------------------------------------------------------

/// Owned fixed-size format buffer. Implements `fmt::Write`; silently
/// truncates on overflow.
pub struct StackFmt<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> Default for StackFmt<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StackFmt<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // only fmt::Write feeds the buffer, but truncation may split a
        // multi-byte character
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Write for StackFmt<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let n = bytes.len().min(N - self.len);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        Ok(())
    }
}

/// Render `value` in plain (non-scientific) notation with `precision`
/// fraction digits, clamped to [`MAX_FLOAT_PRECISION`].
///
/// Values without a usable digit form come out as words the reduced display
/// font shows as blanks: `nan`, `inf` for either infinity, and `ovf` beyond
/// [`FLOAT_OVERFLOW_LIMIT`]. Negative zero prints unsigned.
pub fn format_float(value: f32, precision: u8) -> StackFmt<FLOAT_BUF_LEN> {
    let mut out = StackFmt::new();
    let word = if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some("inf")
    } else if value > FLOAT_OVERFLOW_LIMIT || value < -FLOAT_OVERFLOW_LIMIT {
        Some("ovf")
    } else {
        None
    };
    // StackFmt never reports an error
    let _ = match word {
        Some(word) => out.write_str(word),
        None => {
            // -0.0 == 0.0, so this also drops the sign of negative zero
            let value = if value == 0.0 { 0.0 } else { value };
            let precision = precision.min(MAX_FLOAT_PRECISION) as usize;
            write!(out, "{:.*}", precision, value)
        }
    };
    out
}
