//! Raw frame decoding module
//!
//! This module turns headerless 16-bit raw frame buffers into validated
//! sample grids.

mod decoder;
mod fixed_layout_decoder;
pub mod types;

pub use decoder::FrameDecoder;
pub use fixed_layout_decoder::FixedLayoutDecoder;
pub use types::{ByteOrder, RawFrameSpec, SampleGrid};
