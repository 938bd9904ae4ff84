//! Cursor-based pattern output.
//!
//! [`PatternSink`] is the bottom layer every writer in this crate renders
//! through. It owns a cursor in `0..=u8::MAX`; each write lands at the cursor
//! and advances it, and writes at or past the end of the display are dropped
//! while the cursor still moves. A caller can therefore measure how wide a
//! rendering *would* have been on a larger display.

use ledseg_abi::DigitBuffer;

/// Cursor-addressed sink for segment patterns.
pub trait PatternSink {
    /// Number of digit cells on the display.
    fn size(&self) -> u8;

    /// Current cursor position.
    fn pos(&self) -> u8;

    fn set_pos(&mut self, pos: u8);

    /// Write `pattern` at the cursor and advance. Dropped when the cursor is
    /// past the end; the cursor advances regardless.
    fn write_pattern(&mut self, pattern: u8);

    /// Set or clear bit 7 of the cell at `pos`, leaving the glyph intact.
    /// The cursor does not move.
    fn set_decimal_point_at(&mut self, pos: u8, state: bool);

    /// Blank every cell from the cursor to the end. The cursor stays at the
    /// start of the cleared range.
    fn clear_to_end(&mut self);

    #[inline]
    fn home(&mut self) {
        self.set_pos(0);
    }

    /// Write `patterns` from the cursor, stopping at the end of the display.
    fn write_patterns(&mut self, patterns: &[u8]) {
        for &pattern in patterns {
            if self.pos() >= self.size() {
                break;
            }
            self.write_pattern(pattern);
        }
    }

    /// Decimal point of the cell just before the cursor. No-op at home.
    #[inline]
    fn write_decimal_point(&mut self, state: bool) {
        let pos = self.pos();
        if pos > 0 {
            self.set_decimal_point_at(pos - 1, state);
        }
    }

    /// Blank the whole display and home the cursor.
    #[inline]
    fn clear(&mut self) {
        self.home();
        self.clear_to_end();
    }
}

impl<S: PatternSink + ?Sized> PatternSink for &mut S {
    #[inline]
    fn size(&self) -> u8 {
        (**self).size()
    }

    #[inline]
    fn pos(&self) -> u8 {
        (**self).pos()
    }

    #[inline]
    fn set_pos(&mut self, pos: u8) {
        (**self).set_pos(pos);
    }

    #[inline]
    fn write_pattern(&mut self, pattern: u8) {
        (**self).write_pattern(pattern);
    }

    #[inline]
    fn set_decimal_point_at(&mut self, pos: u8, state: bool) {
        (**self).set_decimal_point_at(pos, state);
    }

    #[inline]
    fn clear_to_end(&mut self) {
        (**self).clear_to_end();
    }

    #[inline]
    fn home(&mut self) {
        (**self).home();
    }

    #[inline]
    fn write_patterns(&mut self, patterns: &[u8]) {
        (**self).write_patterns(patterns);
    }

    #[inline]
    fn write_decimal_point(&mut self, state: bool) {
        (**self).write_decimal_point(state);
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear();
    }
}

/// [`PatternSink`] over a borrowed [`DigitBuffer`].
pub struct PatternWriter<'a, B: DigitBuffer + ?Sized> {
    buffer: &'a mut B,
    pos: u8,
}

impl<'a, B: DigitBuffer + ?Sized> PatternWriter<'a, B> {
    pub fn new(buffer: &'a mut B) -> Self {
        Self::with_pos(buffer, 0)
    }

    /// Writer whose cursor starts at `pos`.
    pub fn with_pos(buffer: &'a mut B, pos: u8) -> Self {
        Self { buffer, pos }
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
}

impl<B: DigitBuffer + ?Sized> PatternSink for PatternWriter<'_, B> {
    #[inline]
    fn size(&self) -> u8 {
        self.buffer.size()
    }

    #[inline]
    fn pos(&self) -> u8 {
        self.pos
    }

    #[inline]
    fn set_pos(&mut self, pos: u8) {
        self.pos = pos;
    }

    #[inline]
    fn write_pattern(&mut self, pattern: u8) {
        self.buffer.write_pattern_at(self.pos, pattern);
        self.pos = self.pos.saturating_add(1);
    }

    #[inline]
    fn set_decimal_point_at(&mut self, pos: u8, state: bool) {
        self.buffer.write_decimal_point_at(pos, state);
    }

    #[inline]
    fn clear_to_end(&mut self) {
        self.buffer.clear_from(self.pos);
    }

    fn write_patterns(&mut self, patterns: &[u8]) {
        let written = self.buffer.write_patterns_at(self.pos, patterns);
        self.pos = self.pos.saturating_add(written);
    }
}
