/// Span of digit cells changed since the last flush, both ends inclusive.
///
/// A display row is one-dimensional, so the damage of any sequence of writes
/// is covered by a single span: the union of every touched cell. Drivers
/// that push cells over a slow bus (shift registers, I2C expanders) use it
/// to send only what changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirtyRange {
    first: u8,
    last: u8,
    dirty: bool,
}

impl Default for DirtyRange {
    fn default() -> Self {
        Self::new()
    }
}

impl DirtyRange {
    pub const fn new() -> Self {
        Self {
            first: 0,
            last: 0,
            dirty: false,
        }
    }

    /// Record a change to `pos`.
    #[inline]
    pub fn add(&mut self, pos: u8) {
        self.add_span(pos, pos);
    }

    /// Record a change to every cell in `first..=last`.
    pub fn add_span(&mut self, first: u8, last: u8) {
        if first > last {
            return;
        }
        if self.dirty {
            self.first = self.first.min(first);
            self.last = self.last.max(last);
        } else {
            self.first = first;
            self.last = last;
            self.dirty = true;
        }
    }

    /// Mark a whole buffer of `size` cells as changed.
    #[inline]
    pub fn mark_all(&mut self, size: u8) {
        if size > 0 {
            self.add_span(0, size - 1);
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.dirty
    }

    /// The changed span, if any.
    #[inline]
    pub fn span(&self) -> Option<(u8, u8)> {
        self.dirty.then_some((self.first, self.last))
    }

    /// Return the changed span and reset the tracker.
    #[inline]
    pub fn take(&mut self) -> Option<(u8, u8)> {
        let span = self.span();
        self.clear();
        span
    }
}
