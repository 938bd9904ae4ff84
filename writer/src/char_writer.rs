use ledseg_abi::GlyphTable;

use crate::PatternSink;

/// Writes characters through a [`GlyphTable`], ASCII by default.
///
/// Codes past the end of the table render as the unknown glyph, which is
/// blank.
pub struct CharWriter<'g, S: PatternSink> {
    sink: S,
    glyphs: GlyphTable<'g>,
}

impl<S: PatternSink> CharWriter<'static, S> {
    pub fn new(sink: S) -> Self {
        Self::with_glyphs(sink, GlyphTable::ASCII)
    }
}

impl<'g, S: PatternSink> CharWriter<'g, S> {
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

    #[inline]
    pub fn glyphs(&self) -> GlyphTable<'g> {
        self.glyphs
    }

    /// Number of characters the glyph table covers.
    #[inline]
    pub fn num_chars(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.sink.size()
    }

    /// Segment pattern for `c`.
    #[inline]
    pub fn pattern(&self, c: char) -> u8 {
        self.glyphs.pattern_for_char(c)
    }

    pub fn write_char(&mut self, c: char) {
        let pattern = self.pattern(c);
        self.sink.write_pattern(pattern);
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
}
