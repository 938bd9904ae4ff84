//! ledseg shared display types
//!
//! This crate provides the canonical definitions shared between the digit
//! buffer implementations (`ledseg-gfx`, or a hardware driver) and the
//! formatting writers (`ledseg-writer`). Having a single source of truth
//! keeps the segment bit layout, the numeric digit codes and the buffer
//! contract from drifting apart between the two sides.
//!
//! Segment layout used by every pattern in this crate:
//!
//! ```text
//!       AAA
//!      F   B
//!      F   B
//!       GGG
//!      E   C
//!      E   C
//!       DDD  DP
//!
//! Segment: DP G F E D C B A
//!    Bits: 7  6 5 4 3 2 1 0
//! ```

#![no_std]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod digit;
pub mod font;
pub mod segments;

#[cfg(test)]
extern crate std;

pub use buffer::DigitBuffer;
pub use digit::{Digit, NUM_DIGIT_PATTERNS};
pub use font::{CHAR_PATTERNS, DIGIT_PATTERNS, GlyphTable, NUM_CHAR_PATTERNS};
pub use segments::*;
