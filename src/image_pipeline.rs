//! Image processing pipeline module
//!
//! This module provides a structured approach to raw frame conversions,
//! with separate modules for frame decoding, FITS writing, and conversion
//! orchestration.

pub mod raw;
pub mod fits;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raw::{
    ByteOrder,
    RawFrameSpec,
    SampleGrid,
    FrameDecoder,
    FixedLayoutDecoder,
};

pub use fits::{
    FitsMetadata,
    FitsWriter,
    StandardFitsWriter,
};

pub use conversions::{
    ConversionReport,
    RawToFitsPipeline,
    derive_output_path,
};
