//! Display logging.
//!
//! All log output funnels through a single **backend** function pointer.
//! A library has no console of its own, so until the embedding firmware
//! registers a backend every line is discarded. Once a backend is registered
//! (a UART writer, an RTT channel, a test capture) all subsequent output goes
//! through it.
//!
//! # Backend contract
//!
//! The backend receives the level and the pre-formatted arguments for a
//! **single log line** and is responsible for writing the text and any line
//! terminator it wants. The writers call into klog from ordinary code paths
//! only, never from interrupt context.
//!
//! # Registration
//!
//! ```ignore
//! // In your board init:
//! ledseg_lib::klog::klog_register_backend(my_backend_fn);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicPtr, AtomicU8, Ordering};

// ---------------------------------------------------------------------------
// Log levels
// ---------------------------------------------------------------------------

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => KlogLevel::Error,
            1 => KlogLevel::Warn,
            2 => KlogLevel::Info,
            3 => KlogLevel::Debug,
            _ => KlogLevel::Trace,
        }
    }

    /// Parse a level name, case-insensitively.
    pub fn from_name(value: &str) -> Option<Self> {
        [
            KlogLevel::Error,
            KlogLevel::Warn,
            KlogLevel::Info,
            KlogLevel::Debug,
            KlogLevel::Trace,
        ]
        .into_iter()
        .find(|level| value.eq_ignore_ascii_case(level.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KlogLevel::Error => "error",
            KlogLevel::Warn => "warn",
            KlogLevel::Info => "info",
            KlogLevel::Debug => "debug",
            KlogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for KlogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KlogLevel::Info as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Backend dispatch
// ---------------------------------------------------------------------------

/// Signature of a klog backend.
pub type KlogBackend = fn(KlogLevel, fmt::Arguments<'_>);

/// Stored as a raw pointer; `null` means "no backend, discard".
static BACKEND: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

#[inline]
fn dispatch(level: KlogLevel, args: fmt::Arguments<'_>) {
    let ptr = BACKEND.load(Ordering::Acquire);
    if ptr.is_null() {
        return;
    }
    // SAFETY: `klog_register_backend` only stores valid `KlogBackend` fn
    // pointers, which are the same size as `*mut ()` on every supported
    // target.
    let backend = unsafe { core::mem::transmute::<*mut (), KlogBackend>(ptr) };
    backend(level, args);
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Register the backend that receives every enabled log line.
pub fn klog_register_backend(backend: KlogBackend) {
    BACKEND.store(backend as *mut (), Ordering::Release);
}

/// Drop the registered backend; subsequent lines are discarded.
pub fn klog_unregister_backend() {
    BACKEND.store(core::ptr::null_mut(), Ordering::Release);
}

/// Reset klog to its default level.
pub fn klog_init() {
    CURRENT_LEVEL.store(KlogLevel::Info as u8, Ordering::Relaxed);
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_get_level() -> KlogLevel {
    KlogLevel::from_raw(CURRENT_LEVEL.load(Ordering::Relaxed))
}

pub fn is_enabled_level(level: KlogLevel) -> bool {
    is_enabled(level)
}

/// Emit a formatted log line at the given level.
pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    dispatch(level, args);
}

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::klog::log_args($level, ::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}

/// Serializes tests that touch the global level or backend.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn level_names_round_trip() {
        for level in [
            KlogLevel::Error,
            KlogLevel::Warn,
            KlogLevel::Info,
            KlogLevel::Debug,
            KlogLevel::Trace,
        ] {
            assert_eq!(KlogLevel::from_name(level.as_str()), Some(level));
            assert_eq!(KlogLevel::from_raw(level as u8), level);
        }
        assert_eq!(KlogLevel::from_name("DEBUG"), Some(KlogLevel::Debug));
        assert_eq!(KlogLevel::from_name("verbose"), None);
        assert_eq!(KlogLevel::from_raw(42), KlogLevel::Trace);
    }

    #[test]
    fn registered_backend_receives_lines() {
        static LINES: AtomicUsize = AtomicUsize::new(0);

        fn counting(level: KlogLevel, _args: fmt::Arguments<'_>) {
            if level == KlogLevel::Error {
                LINES.fetch_add(1, Ordering::Relaxed);
            }
        }

        let _guard = lock();
        klog_register_backend(counting);
        crate::klog_error!("display {} missing", 3);
        klog_unregister_backend();
        crate::klog_error!("dropped");
        assert_eq!(LINES.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn debug_lines_follow_the_level() {
        static DEBUG_LINES: AtomicUsize = AtomicUsize::new(0);

        fn counting(level: KlogLevel, _args: fmt::Arguments<'_>) {
            if level == KlogLevel::Debug {
                DEBUG_LINES.fetch_add(1, Ordering::Relaxed);
            }
        }

        let _guard = lock();
        klog_register_backend(counting);

        klog_set_level(KlogLevel::Info);
        assert!(!is_enabled_level(KlogLevel::Debug));
        crate::klog_debug!("overflow {}", 100);
        assert_eq!(DEBUG_LINES.load(Ordering::Relaxed), 0);

        klog_set_level(KlogLevel::Debug);
        assert!(is_enabled_level(KlogLevel::Debug));
        crate::klog_debug!("overflow {}", 100);
        crate::klog_trace!("still filtered");
        assert_eq!(DEBUG_LINES.load(Ordering::Relaxed), 1);

        klog_unregister_backend();
        klog_init();
        assert_eq!(klog_get_level(), KlogLevel::Info);
    }

    #[test]
    fn levels_are_ordered_by_verbosity() {
        assert!(KlogLevel::Error < KlogLevel::Warn);
        assert!(KlogLevel::Debug < KlogLevel::Trace);
    }
}
