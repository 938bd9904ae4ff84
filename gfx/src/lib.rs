#![no_std]
#![forbid(unsafe_code)]

//! Concrete digit buffers for the `ledseg` writers.

pub mod dirty;
pub mod segment_buffer;
pub mod shared;

#[cfg(test)]
extern crate std;

pub use dirty::DirtyRange;
pub use segment_buffer::{SegmentBuffer, SliceBuffer};
pub use shared::SharedBuffer;
