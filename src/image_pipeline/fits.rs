//! FITS writing module
//!
//! This module provides FITS primary-HDU writing for unsigned 16-bit image
//! data, including the header card synthesis the format requires.

pub mod header;
mod writer;
mod standard_fits_writer;

pub use writer::{FitsMetadata, FitsWriter};
pub use standard_fits_writer::StandardFitsWriter;
