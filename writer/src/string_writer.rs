use ledseg_abi::{GlyphTable, Segments};

use crate::PatternSink;

/// Writes text, folding each `'.'` into the decimal point of the character
/// before it where possible, so `"1.5"` takes two cells instead of three.
pub struct StringWriter<'g, S: PatternSink> {
    sink: S,
    glyphs: GlyphTable<'g>,
}

/// Decimal point state of the last cell written by the current call.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    None,
    Open,
    Dotted,
}

impl<S: PatternSink> StringWriter<'static, S> {
    pub fn new(sink: S) -> Self {
        Self::with_glyphs(sink, GlyphTable::ASCII)
    }
}

impl<'g, S: PatternSink> StringWriter<'g, S> {
    pub fn with_glyphs(sink: S, glyphs: GlyphTable<'g>) -> Self {
        Self { sink, glyphs }
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

    /// Write `s` up to the first NUL. Returns the cells consumed, counting
    /// cells past the end of the display.
    pub fn write_str(&mut self, s: &str) -> u8 {
        let start = self.sink.pos();
        let mut prev = Prev::None;
        for c in s.chars().take_while(|&c| c != '\0') {
            let pattern = self.glyphs.pattern_for_char(c);
            prev = self.write_glyph(c == '.', pattern, prev);
        }
        self.sink.pos().saturating_sub(start)
    }

    /// Byte-string form of [`write_str`](Self::write_str); each byte is a
    /// glyph code.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> u8 {
        let start = self.sink.pos();
        let mut prev = Prev::None;
        for &b in bytes.iter().take_while(|&&b| b != 0) {
            let pattern = self.glyphs.pattern(b);
            prev = self.write_glyph(b == b'.', pattern, prev);
        }
        self.sink.pos().saturating_sub(start)
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

    fn write_glyph(&mut self, is_period: bool, pattern: u8, prev: Prev) -> Prev {
        if is_period && prev == Prev::Open {
            self.sink.write_decimal_point(true);
            return Prev::Dotted;
        }
        self.sink.write_pattern(pattern);
        if Segments::has_decimal_point(pattern) {
            Prev::Dotted
        } else {
            Prev::Open
        }
    }
}
