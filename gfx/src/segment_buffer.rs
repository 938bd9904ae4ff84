use ledseg_abi::DigitBuffer;

use crate::DirtyRange;

/// An owned, heap-free row of `N` digit cells that implements [`DigitBuffer`].
///
/// `SegmentBuffer` is the in-memory frame a display driver refreshes from:
/// the writers render into it, and the driver pushes the cells named by
/// [`take_dirty`](Self::take_dirty) to the hardware. Only writes that change
/// a cell mark it dirty.
///
/// `N` must not exceed 255.
#[derive(Clone, Debug)]
pub struct SegmentBuffer<const N: usize> {
    patterns: [u8; N],
    dirty: DirtyRange,
}

impl<const N: usize> Default for SegmentBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SegmentBuffer<N> {
    const SIZE: u8 = {
        assert!(N <= u8::MAX as usize, "a digit buffer holds at most 255 cells");
        N as u8
    };

    /// A blank buffer.
    pub const fn new() -> Self {
        Self {
            patterns: [0u8; N],
            dirty: DirtyRange::new(),
        }
    }

    /// A buffer preloaded with `patterns`; every cell starts dirty.
    pub fn from_patterns(patterns: [u8; N]) -> Self {
        let mut dirty = DirtyRange::new();
        dirty.mark_all(Self::SIZE);
        Self { patterns, dirty }
    }

    #[inline]
    pub fn patterns(&self) -> &[u8; N] {
        &self.patterns
    }

    #[inline]
    pub fn dirty(&self) -> &DirtyRange {
        &self.dirty
    }

    /// Return the span changed since the previous call and reset tracking.
    #[inline]
    pub fn take_dirty(&mut self) -> Option<(u8, u8)> {
        self.dirty.take()
    }

    /// Force a full refresh on the next flush.
    #[inline]
    pub fn mark_all_dirty(&mut self) {
        self.dirty.mark_all(Self::SIZE);
    }
}

impl<const N: usize> DigitBuffer for SegmentBuffer<N> {
    #[inline]
    fn size(&self) -> u8 {
        Self::SIZE
    }

    #[inline]
    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        let cell = &mut self.patterns[pos as usize];
        if *cell != pattern {
            *cell = pattern;
            self.dirty.add(pos);
        }
    }

    #[inline]
    fn pattern_at(&self, pos: u8) -> u8 {
        self.patterns[pos as usize]
    }
}

/// A [`DigitBuffer`] over a caller-supplied byte slice, one byte per cell.
///
/// Useful when the cell memory belongs to someone else, e.g. the transmit
/// buffer of a display controller driver.
#[derive(Debug)]
pub struct SliceBuffer<'a> {
    data: &'a mut [u8],
}

impl<'a> SliceBuffer<'a> {
    /// Returns `None` if `data` holds more cells than a `u8` position can
    /// address.
    pub fn new(data: &'a mut [u8]) -> Option<Self> {
        if data.len() > u8::MAX as usize {
            return None;
        }
        Some(Self { data })
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }
}

impl DigitBuffer for SliceBuffer<'_> {
    #[inline]
    fn size(&self) -> u8 {
        self.data.len() as u8
    }

    #[inline]
    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        self.data[pos as usize] = pattern;
    }

    #[inline]
    fn pattern_at(&self, pos: u8) -> u8 {
        self.data[pos as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledseg_abi::{PATTERN_1, PATTERN_8};

    #[test]
    fn only_changes_are_dirty() {
        let mut buf = SegmentBuffer::<4>::new();
        assert_eq!(buf.size(), 4);
        buf.write_pattern_at(0, 0);
        assert!(buf.dirty().is_empty());
        buf.write_pattern_at(2, PATTERN_1);
        buf.write_pattern_at(1, PATTERN_8);
        assert_eq!(buf.take_dirty(), Some((1, 2)));
        buf.write_pattern_at(2, PATTERN_1);
        assert_eq!(buf.take_dirty(), None);
        assert_eq!(buf.patterns(), &[0, PATTERN_8, PATTERN_1, 0]);
    }

    #[test]
    fn out_of_range_does_not_mark_dirty() {
        let mut buf = SegmentBuffer::<2>::new();
        buf.write_pattern_at(2, PATTERN_8);
        buf.write_decimal_point_at(9, true);
        assert!(buf.dirty().is_empty());
    }

    #[test]
    fn preloaded_buffer_is_fully_dirty() {
        let mut buf = SegmentBuffer::from_patterns([1, 2, 3]);
        assert_eq!(buf.take_dirty(), Some((0, 2)));
        buf.mark_all_dirty();
        assert_eq!(buf.take_dirty(), Some((0, 2)));
    }

    #[test]
    fn slice_buffer_wraps_caller_memory() {
        let mut cells = [0u8; 3];
        let mut buf = SliceBuffer::new(&mut cells).unwrap();
        assert_eq!(buf.write_patterns_at(1, &[5, 6, 7]), 2);
        assert_eq!(buf.data(), &[0, 5, 6]);
        let _ = buf.into_inner();
        assert_eq!(cells, [0, 5, 6]);

        let mut big = [0u8; 256];
        assert!(SliceBuffer::new(&mut big).is_none());
    }
}
