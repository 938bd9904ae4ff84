use ledseg_abi::{GlyphTable, PATTERN_SPACE};

use crate::PatternSink;

/// Marquee that slides a string across the whole display one cell per step.
///
/// Call an `init_scroll_*` method once, then the matching `scroll_*` method
/// on every tick until it returns `false`.
pub struct StringScroller<'g, 't, S: PatternSink> {
    sink: S,
    glyphs: GlyphTable<'g>,
    text: &'t [u8],
    /// Text index shown in cell 0; negative while the text enters from the
    /// right.
    index: isize,
}

impl<'t, S: PatternSink> StringScroller<'static, 't, S> {
    pub fn new(sink: S) -> Self {
        Self::with_glyphs(sink, GlyphTable::ASCII)
    }
}

impl<'g, 't, S: PatternSink> StringScroller<'g, 't, S> {
    pub fn with_glyphs(sink: S, glyphs: GlyphTable<'g>) -> Self {
        Self {
            sink,
            glyphs,
            text: &[],
            index: 0,
        }
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Start with `text` just past the right edge and a blank display.
    pub fn init_scroll_left(&mut self, text: &'t str) {
        self.text = text.as_bytes();
        self.index = -(self.sink.size() as isize);
        self.render();
    }

    /// Shift one cell to the left. Returns `false`, leaving the display
    /// untouched, once the text has fully left the display.
    pub fn scroll_left(&mut self) -> bool {
        if self.index >= self.text_len() {
            return false;
        }
        self.index += 1;
        self.render();
        true
    }

    /// Start with `text` just past the left edge and a blank display.
    pub fn init_scroll_right(&mut self, text: &'t str) {
        self.text = text.as_bytes();
        self.index = self.text_len();
        self.render();
    }

    /// Shift one cell to the right. Returns `false` once the text has fully
    /// left the display.
    pub fn scroll_right(&mut self) -> bool {
        if self.index <= -(self.sink.size() as isize) {
            return false;
        }
        self.index -= 1;
        self.render();
        true
    }

    #[inline]
    pub fn clear(&mut self) {
        self.sink.clear();
    }

    #[inline]
    fn text_len(&self) -> isize {
        self.text.len() as isize
    }

    fn render(&mut self) {
        self.sink.home();
        for cell in 0..self.sink.size() {
            let pattern = usize::try_from(self.index + cell as isize)
                .ok()
                .and_then(|k| self.text.get(k))
                .map_or(PATTERN_SPACE, |&code| self.glyphs.pattern(code));
            self.sink.write_pattern(pattern);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternWriter;
    use ledseg_abi::{PATTERN_1, PATTERN_2, PATTERN_3};
    use ledseg_gfx::SegmentBuffer;
    use std::vec::Vec;

    const SP: u8 = PATTERN_SPACE;

    fn frames(left: bool) -> Vec<[u8; 2]> {
        let mut buf = SegmentBuffer::<2>::new();
        let mut frames = Vec::new();
        let mut s = StringScroller::new(PatternWriter::new(&mut buf));
        if left {
            s.init_scroll_left("123");
        } else {
            s.init_scroll_right("123");
        }
        frames.push(*s.sink().buffer().patterns());
        loop {
            let more = if left { s.scroll_left() } else { s.scroll_right() };
            if !more {
                break;
            }
            frames.push(*s.sink().buffer().patterns());
        }
        frames
    }

    #[test]
    fn scrolls_left_through_text() {
        assert_eq!(
            frames(true),
            [
                [SP, SP],
                [SP, PATTERN_1],
                [PATTERN_1, PATTERN_2],
                [PATTERN_2, PATTERN_3],
                [PATTERN_3, SP],
                [SP, SP],
            ]
        );
    }

    #[test]
    fn scrolls_right_through_text() {
        assert_eq!(
            frames(false),
            [
                [SP, SP],
                [PATTERN_3, SP],
                [PATTERN_2, PATTERN_3],
                [PATTERN_1, PATTERN_2],
                [SP, PATTERN_1],
                [SP, SP],
            ]
        );
    }

    #[test]
    fn idle_scroller_does_nothing() {
        let mut buf = SegmentBuffer::<2>::new();
        let mut s = StringScroller::new(PatternWriter::new(&mut buf));
        assert!(!s.scroll_left());
        s.init_scroll_left("");
        assert!(s.scroll_left());
        assert!(s.scroll_left());
        assert!(!s.scroll_left());
    }
}
