use spin::{Mutex, MutexGuard};

use ledseg_abi::DigitBuffer;

/// A digit buffer behind a spin lock.
///
/// The writers assume a single owner. When the same display is updated from
/// more than one context (a clock tick and a button handler, say), wrap it
/// in a `SharedBuffer` and either hold [`lock`](Self::lock) for a whole
/// composite write, or hand `&SharedBuffer` to a writer directly, which
/// takes the lock once per cell.
pub struct SharedBuffer<B> {
    inner: Mutex<B>,
}

impl<B> SharedBuffer<B> {
    pub const fn new(buffer: B) -> Self {
        Self {
            inner: Mutex::new(buffer),
        }
    }

    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, B> {
        self.inner.lock()
    }

    /// Run `f` with the buffer locked for its whole duration.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }
}

impl<B: DigitBuffer> DigitBuffer for &SharedBuffer<B> {
    #[inline]
    fn size(&self) -> u8 {
        self.inner.lock().size()
    }

    #[inline]
    fn set_pattern_at(&mut self, pos: u8, pattern: u8) {
        self.inner.lock().set_pattern_at(pos, pattern);
    }

    #[inline]
    fn pattern_at(&self, pos: u8) -> u8 {
        self.inner.lock().pattern_at(pos)
    }

    #[inline]
    fn write_decimal_point_at(&mut self, pos: u8, state: bool) {
        // read and write under one lock
        self.inner.lock().write_decimal_point_at(pos, state);
    }

    #[inline]
    fn clear_from(&mut self, pos: u8) {
        self.inner.lock().clear_from(pos);
    }
}
