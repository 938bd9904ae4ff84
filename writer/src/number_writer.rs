//! Numeric formatting onto a [`PatternSink`].

use ledseg_abi::{Digit, PATTERN_0, PATTERN_SPACE};
use ledseg_lib::numfmt::{self, DecimalBuf, format_float};
use ledseg_lib::{WriterConfig, klog_debug, klog_trace};

use crate::PatternSink;

/// Renders integers, hex values and floats through the restricted digit
/// character set (`0`-`F`, space, minus).
///
/// Every method writes at the sink cursor and advances it. Nothing here
/// fails: bad digit codes render as space and fixed-width overflow renders as
/// a blank field.
pub struct NumberWriter<S: PatternSink> {
    sink: S,
    /// Fraction digits for [`write_float_default`](Self::write_float_default).
    float_precision: u8,
}

impl<S: PatternSink> NumberWriter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, &WriterConfig::default())
    }

    /// Take the default float precision from `config`.
    pub fn with_config(sink: S, config: &WriterConfig) -> Self {
        Self {
            sink,
            float_precision: config.float_precision,
        }
    }

    #[inline]
    pub fn float_precision(&self) -> u8 {
        self.float_precision
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    #[inline]
    pub fn home(&mut self) {
        self.sink.home();
    }

    #[inline]
    pub fn clear(&mut self) {
        self.sink.clear();
    }

    #[inline]
    pub fn clear_to_end(&mut self) {
        self.sink.clear_to_end();
    }

    /// Write one digit code. Codes outside the character set render as
    /// space.
    pub fn write_digit(&mut self, digit: Digit) {
        if !digit.is_valid() {
            klog_trace!("ledseg: digit code {} out of range", digit.0);
        }
        self.sink.write_pattern(digit.pattern());
    }

    pub fn write_digits(&mut self, digits: &[Digit]) {
        for &digit in digits {
            self.write_digit(digit);
        }
    }

    /// Two-digit decimal, right justified with `pad` in the tens cell.
    /// Values of 100 and up render as two blank cells.
    pub fn write_dec2(&mut self, value: u8, pad: u8) {
        let Some((tens, ones)) = numfmt::split_dec2(value) else {
            klog_debug!("ledseg: dec2 overflow {}", value);
            self.write_blanks(2);
            return;
        };
        if tens == 0 {
            self.sink.write_pattern(pad);
        } else {
            self.write_digit(Digit(tens));
        }
        self.write_digit(Digit(ones));
    }

    /// Four-digit decimal, right justified with `pad`. Values of 10000 and
    /// up render as four blank cells.
    pub fn write_dec4(&mut self, value: u16, pad: u8) {
        let Some((high, low)) = numfmt::split_dec4(value) else {
            klog_debug!("ledseg: dec4 overflow {}", value);
            self.write_blanks(4);
            return;
        };
        if high == 0 {
            self.sink.write_pattern(pad);
            self.sink.write_pattern(pad);
            self.write_dec2(low, pad);
        } else {
            self.write_dec2(high, pad);
            self.write_dec2(low, PATTERN_0);
        }
    }

    /// Two BCD nibbles; a nibble above 9 renders as space.
    pub fn write_bcd(&mut self, bcd: u8) {
        self.write_digits(&numfmt::to_bcd(bcd));
    }

    pub fn write_hex_byte(&mut self, value: u8) {
        self.write_digits(&numfmt::to_hex_byte(value));
    }

    pub fn write_hex_word(&mut self, value: u16) {
        self.write_digits(&numfmt::to_hex_word(value));
    }

    /// Unsigned decimal inside a box of `box_size` cells.
    ///
    /// A positive box right justifies, a negative box left justifies, zero
    /// means no padding. Digits that do not fit spill past the box. Returns
    /// the number of cells consumed.
    pub fn write_unsigned_decimal(&mut self, value: u16, box_size: i8) -> u8 {
        let mut buf = DecimalBuf::new();
        self.write_digits_inside_box(buf.unsigned(value), box_size)
    }

    /// Same as [`write_unsigned_decimal`](Self::write_unsigned_decimal) with
    /// a leading minus for negative values. `i16::MIN` is exact.
    pub fn write_signed_decimal(&mut self, value: i16, box_size: i8) -> u8 {
        let mut buf = DecimalBuf::new();
        self.write_digits_inside_box(buf.signed(value), box_size)
    }

    /// Plain-notation float with `precision` fraction digits. The decimal
    /// point folds into the cell before it. NaN, infinities and magnitudes
    /// past 32 bits render as three blank cells.
    pub fn write_float(&mut self, value: f32, precision: u8) {
        let text = format_float(value, precision);
        for &c in text.as_bytes() {
            self.write_char(c as char);
        }
    }

    /// [`write_float`](Self::write_float) at the configured precision.
    pub fn write_float_default(&mut self, value: f32) {
        self.write_float(value, self.float_precision);
    }

    /// Reduced character set: digits and `'-'` map to their codes, `'.'`
    /// sets the decimal point of the previous cell, anything else is a space.
    pub fn write_char(&mut self, c: char) {
        if c == '.' {
            self.write_decimal_point(true);
            return;
        }
        let code = u8::try_from(c).unwrap_or(b' ');
        self.write_digit(Digit::from_ascii(code));
    }

    /// Decimal point of the cell just before the cursor.
    #[inline]
    pub fn write_decimal_point(&mut self, state: bool) {
        self.sink.write_decimal_point(state);
    }

    /// Decimal point of an arbitrary cell; used for clock colons.
    #[inline]
    pub fn set_decimal_point_at(&mut self, pos: u8, state: bool) {
        self.sink.set_decimal_point_at(pos, state);
    }

    fn write_blanks(&mut self, count: u8) {
        for _ in 0..count {
            self.sink.write_pattern(PATTERN_SPACE);
        }
    }

    fn write_digits_inside_box(&mut self, digits: &[Digit], box_size: i8) -> u8 {
        let len = digits.len() as u8;
        let width = box_size.unsigned_abs();
        if len >= width {
            self.write_digits(digits);
            return len;
        }

        let pad = width - len;
        if box_size < 0 {
            self.write_digits(digits);
            self.write_blanks(pad);
        } else {
            self.write_blanks(pad);
            self.write_digits(digits);
        }
        width
    }
}
