//! Explicit-position interface.
//!
//! [`PositionWriter`] keeps no cursor. Each call names its target cell and
//! returns how many cells it consumed, which is where the next field goes.
//! Internally every call places a short-lived [`PatternWriter`] at `pos` and
//! reuses the cursor-based writers, so both interfaces share one set of
//! bounds and padding rules.
//!
//! Cursors are `u8` and stop at 255, so a returned width never exceeds
//! `255 - pos`. Fields that start within a few cells of 255 report fewer
//! cells than they would have used; displays that small never get there.

use ledseg_abi::{Digit, DigitBuffer};

use crate::{CharWriter, NumberWriter, PatternSink, PatternWriter, StringWriter};

pub struct PositionWriter<'a, B: DigitBuffer + ?Sized> {
    buffer: &'a mut B,
}

/// Generate `<name>_at(pos, ..)` for each listed [`NumberWriter`] method.
macro_rules! impl_number_at {
    ($($name:ident($($arg:ident: $ty:ty),*);)*) => {
        paste::paste! {
            $(
                #[doc = "[`NumberWriter::" $name "`] starting at `pos`. Returns the cells consumed, at most `255 - pos`."]
                pub fn [<$name _at>](&mut self, pos: u8, $($arg: $ty),*) -> u8 {
                    self.with_cursor(pos, |sink| {
                        NumberWriter::new(sink).$name($($arg),*);
                    })
                }
            )*
        }
    };
}

impl<'a, B: DigitBuffer + ?Sized> PositionWriter<'a, B> {
    pub fn new(buffer: &'a mut B) -> Self {
        Self { buffer }
    }

    #[inline]
    pub fn buffer(&self) -> &B {
        &*self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut B {
        &mut *self.buffer
    }

    pub fn into_buffer(self) -> &'a mut B {
        self.buffer
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.buffer.size()
    }

    /// Run `f` against a cursor placed at `pos` and return how far it moved.
    /// The cursor saturates at 255, which caps the result at `255 - pos`.
    fn with_cursor(&mut self, pos: u8, f: impl FnOnce(&mut PatternWriter<'_, B>)) -> u8 {
        let mut sink = PatternWriter::with_pos(&mut *self.buffer, pos);
        f(&mut sink);
        sink.pos().saturating_sub(pos)
    }

    pub fn write_pattern_at(&mut self, pos: u8, pattern: u8) -> u8 {
        self.with_cursor(pos, |sink| sink.write_pattern(pattern))
    }

    /// Stops at the end of the display; returns the cells written.
    pub fn write_patterns_at(&mut self, pos: u8, patterns: &[u8]) -> u8 {
        self.with_cursor(pos, |sink| sink.write_patterns(patterns))
    }

    #[inline]
    pub fn write_decimal_point_at(&mut self, pos: u8, state: bool) {
        self.buffer.write_decimal_point_at(pos, state);
    }

    #[inline]
    pub fn clear_to_end_at(&mut self, pos: u8) {
        self.buffer.clear_from(pos);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear_all();
    }

    /// One glyph from the full ASCII table at `pos`.
    pub fn write_char_at(&mut self, pos: u8, c: char) -> u8 {
        self.with_cursor(pos, |sink| CharWriter::new(sink).write_char(c))
    }

    /// Text at `pos` with periods folded into decimal points.
    pub fn write_str_at(&mut self, pos: u8, s: &str) -> u8 {
        self.with_cursor(pos, |sink| {
            StringWriter::new(sink).write_str(s);
        })
    }

    impl_number_at! {
        write_digit(digit: Digit);
        write_digits(digits: &[Digit]);
        write_dec2(value: u8, pad: u8);
        write_dec4(value: u16, pad: u8);
        write_bcd(bcd: u8);
        write_hex_byte(value: u8);
        write_hex_word(value: u16);
        write_unsigned_decimal(value: u16, box_size: i8);
        write_signed_decimal(value: i16, box_size: i8);
        write_float(value: f32, precision: u8);
    }
}
