//! Seven-segment formatting engine.
//!
//! Two ways to address the display:
//!
//! - **Cursor**: [`PatternWriter`] implements [`PatternSink`], and every
//!   composite writer (`NumberWriter`, `CharWriter`, `ClockWriter`, ...) is
//!   generic over a sink it owns or borrows (`&mut PatternWriter` works too).
//! - **Explicit position**: [`PositionWriter`] takes the target cell on every
//!   call and returns the width consumed.
//!
//! Both sit on the bounds-checked [`DigitBuffer`](ledseg_abi::DigitBuffer)
//! defaults, so writes past the end of the display are dropped the same way
//! everywhere.

#![no_std]
#![forbid(unsafe_code)]

pub mod char_writer;
pub mod clock_writer;
pub mod level_writer;
pub mod number_writer;
pub mod pattern_writer;
pub mod position_writer;
pub mod string_scroller;
pub mod string_writer;
pub mod temperature_writer;

#[cfg(test)]
extern crate std;

pub use char_writer::CharWriter;
pub use clock_writer::ClockWriter;
pub use level_writer::LevelWriter;
pub use number_writer::NumberWriter;
pub use pattern_writer::{PatternSink, PatternWriter};
pub use position_writer::PositionWriter;
pub use string_scroller::StringScroller;
pub use string_writer::StringWriter;
pub use temperature_writer::TemperatureWriter;
