use crate::segments::{PATTERN_SPACE, Segments};

/// Digit buffer contract.
///
/// A digit buffer is a fixed row of `size()` cells, each holding one segment
/// pattern. Implementors provide the three raw accessors; the bounds-checked
/// operations the writers rely on are provided as default methods built on
/// those accessors.
///
/// Implementations:
/// - **`SegmentBuffer<N>`** (`ledseg-gfx`): owned array with dirty tracking
/// - **`SliceBuffer`** (`ledseg-gfx`): borrowed byte slice
/// - **`&SharedBuffer<B>`** (`ledseg-gfx`): spin-locked wrapper
/// - any display driver exposing the same three calls
///
/// Positions at or past `size()` are never an error: every provided method
/// silently drops them, which models a display that is narrower than the
/// text written to it.
pub trait DigitBuffer {
    /// Number of digit cells. Fixed for the lifetime of the buffer.
    fn size(&self) -> u8;

    /// Store `pattern` at `pos`.
    ///
    /// Callers must ensure `pos < size()`; use [`write_pattern_at`] for a
    /// bounds-checked write.
    ///
    /// [`write_pattern_at`]: DigitBuffer::write_pattern_at
    fn set_pattern_at(&mut self, pos: u8, pattern: u8);

    /// Read the pattern stored at `pos`. Callers must ensure `pos < size()`.
    fn pattern_at(&self, pos: u8) -> u8;

    // -- bounds-checked defaults built on the above primitives --

    /// Write one pattern. Out-of-range positions are ignored.
    #[inline]
    fn write_pattern_at(&mut self, pos: u8, pattern: u8) {
        if pos >= self.size() {
            return;
        }
        self.set_pattern_at(pos, pattern);
    }

    /// Write `patterns` starting at `pos`, stopping at the end of the buffer.
    ///
    /// Patterns that do not fit are discarded. Returns the number of cells
    /// actually written.
    fn write_patterns_at(&mut self, pos: u8, patterns: &[u8]) -> u8 {
        let size = self.size();
        let mut cursor = pos;
        for &pattern in patterns {
            if cursor >= size {
                break;
            }
            self.set_pattern_at(cursor, pattern);
            cursor += 1;
        }
        cursor.saturating_sub(pos)
    }

    /// Set or clear the decimal point of the cell at `pos`, keeping its
    /// glyph bits. Out-of-range positions are ignored.
    #[inline]
    fn write_decimal_point_at(&mut self, pos: u8, state: bool) {
        if pos >= self.size() {
            return;
        }
        let current = self.pattern_at(pos);
        self.set_pattern_at(pos, Segments::with_decimal_point(current, state));
    }

    /// Blank every cell from `pos` to the end of the buffer.
    fn clear_from(&mut self, pos: u8) {
        let size = self.size();
        for i in pos..size {
            self.set_pattern_at(i, PATTERN_SPACE);
        }
    }

    /// Blank the whole buffer.
    #[inline]
    fn clear_all(&mut self) {
        self.clear_from(0);
    }
}

impl<B: DigitBuffer + ?Sized> DigitBuffer for &mut B {
    #[inline]
    fn size(&self) -> u8 {
        (**self).size()
    }

    #[inline]
    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        (**self).set_pattern_at(pos, pattern);
    }

    #[inline]
    fn pattern_at(&self, pos: u8) -> u8 {
        (**self).pattern_at(pos)
    }

    #[inline]
    fn write_pattern_at(&mut self, pos: u8, pattern: u8) {
        (**self).write_pattern_at(pos, pattern);
    }

    #[inline]
    fn write_patterns_at(&mut self, pos: u8, patterns: &[u8]) -> u8 {
        (**self).write_patterns_at(pos, patterns)
    }

    #[inline]
    fn write_decimal_point_at(&mut self, pos: u8, state: bool) {
        (**self).write_decimal_point_at(pos, state);
    }

    #[inline]
    fn clear_from(&mut self, pos: u8) {
        (**self).clear_from(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{PATTERN_1, PATTERN_8};

    struct Cells<const N: usize>([u8; N]);

    impl<const N: usize> DigitBuffer for Cells<N> {
        fn size(&self) -> u8 {
            N as u8
        }
        fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
            self.0[pos as usize] = pattern;
        }
        fn pattern_at(&self, pos: u8) -> u8 {
            self.0[pos as usize]
        }
    }

    #[test]
    fn out_of_range_write_is_dropped() {
        let mut cells = Cells([0u8; 3]);
        cells.write_pattern_at(3, 0xFF);
        cells.write_pattern_at(200, 0xFF);
        assert_eq!(cells.0, [0, 0, 0]);
        cells.write_pattern_at(2, PATTERN_1);
        assert_eq!(cells.0, [0, 0, PATTERN_1]);
    }

    #[test]
    fn multi_write_stops_at_end() {
        let mut cells = Cells([0u8; 3]);
        let written = cells.write_patterns_at(0, &[1, 2, 3, 4, 5]);
        assert_eq!(written, 3);
        assert_eq!(cells.0, [1, 2, 3]);

        let mut cells = Cells([0u8; 3]);
        assert_eq!(cells.write_patterns_at(2, &[7, 8]), 1);
        assert_eq!(cells.write_patterns_at(5, &[9]), 0);
        assert_eq!(cells.0, [0, 0, 7]);
    }

    #[test]
    fn decimal_point_is_read_modify_write() {
        let mut cells = Cells([PATTERN_8, PATTERN_1]);
        cells.write_decimal_point_at(1, true);
        assert_eq!(cells.0[1], PATTERN_1 | 0x80);
        assert_eq!(cells.0[0], PATTERN_8);
        cells.write_decimal_point_at(1, false);
        assert_eq!(cells.0[1], PATTERN_1);
        cells.write_decimal_point_at(2, true);
        assert_eq!(cells.0, [PATTERN_8, PATTERN_1]);
    }

    #[test]
    fn clear_from_keeps_prefix() {
        let mut cells = Cells([9u8; 4]);
        cells.clear_from(1);
        assert_eq!(cells.0, [9, 0, 0, 0]);
        cells.clear_from(4);
        cells.clear_from(250);
        assert_eq!(cells.0, [9, 0, 0, 0]);
        cells.clear_all();
        assert_eq!(cells.0, [0; 4]);
    }

    #[test]
    fn forwards_through_mut_ref() {
        let mut cells = Cells([0u8; 2]);
        let mut by_ref = &mut cells;
        DigitBuffer::write_pattern_at(&mut by_ref, 1, 5);
        assert_eq!(by_ref.size(), 2);
        assert_eq!(cells.0, [0, 5]);
    }
}
