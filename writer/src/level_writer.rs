use ledseg_abi::{PATTERN_LEVEL_BOTH, PATTERN_LEVEL_LEFT};

use crate::PatternSink;

/// Horizontal bar graph across the whole display.
///
/// Each cell shows two steps: the left bar (segments E and F) and the right
/// bar (segments B and C), so a 4-digit display has levels `0..=8`.
pub struct LevelWriter<S: PatternSink> {
    sink: S,
}

impl<S: PatternSink> LevelWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    #[inline]
    pub fn max_level(&self) -> u16 {
        self.sink.size() as u16 * 2
    }

    /// Draw `level` from the left edge and blank the rest. Levels above
    /// [`max_level`](Self::max_level) draw a full bar.
    pub fn write_level(&mut self, level: u16) {
        let level = level.min(self.max_level());
        let full = level / 2;

        self.sink.home();
        for _ in 0..full {
            self.sink.write_pattern(PATTERN_LEVEL_BOTH);
        }
        if level % 2 == 1 {
            self.sink.write_pattern(PATTERN_LEVEL_LEFT);
        }
        self.sink.clear_to_end();
    }

    #[inline]
    pub fn clear(&mut self) {
        self.sink.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternWriter;
    use ledseg_gfx::SegmentBuffer;

    const BOTH: u8 = PATTERN_LEVEL_BOTH;
    const LEFT: u8 = PATTERN_LEVEL_LEFT;

    #[test]
    fn half_steps() {
        let mut buf = SegmentBuffer::from_patterns([0xFF; 4]);
        let mut w = LevelWriter::new(PatternWriter::new(&mut buf));
        assert_eq!(w.max_level(), 8);
        w.write_level(3);
        assert_eq!(w.sink().buffer().patterns(), &[BOTH, LEFT, 0, 0]);
        w.write_level(4);
        assert_eq!(w.sink().buffer().patterns(), &[BOTH, BOTH, 0, 0]);
        w.write_level(0);
        assert_eq!(buf.patterns(), &[0, 0, 0, 0]);
    }

    #[test]
    fn clamps_to_full_bar() {
        let mut buf = SegmentBuffer::<3>::new();
        let mut w = LevelWriter::new(PatternWriter::new(&mut buf));
        w.write_level(u16::MAX);
        assert_eq!(buf.patterns(), &[BOTH; 3]);
    }
}
