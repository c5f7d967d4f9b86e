//! Pipeline conversions module
//!
//! This module contains orchestration logic for raw frame to FITS
//! conversions, single-file and recursive batch.

mod raw_to_fits;


pub use raw_to_fits::{ConversionReport, RawToFitsPipeline, derive_output_path};
