use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::{ByteOrder, SampleGrid};

/// Provenance recorded in the FITS header alongside the image itself.
#[derive(Debug, Clone)]
pub struct FitsMetadata {
    /// Name of the source raw file, when the frame came from a file.
    pub source: Option<String>,
    /// Byte order the raw frame was decoded with.
    pub byte_order: ByteOrder,
}

pub trait FitsWriter {
    fn write_fits(
        &self,
        grid: &SampleGrid,
        output: &mut dyn Write,
        meta: &FitsMetadata,
    ) -> Result<()>;
}
