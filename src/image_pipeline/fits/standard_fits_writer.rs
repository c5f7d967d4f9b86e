use std::io::Write;

use byteorder::{BigEndian, ByteOrder as _};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::fits::header::{BLOCK_LEN, FitsHeader};
use crate::image_pipeline::fits::writer::{FitsMetadata, FitsWriter};
use crate::image_pipeline::raw::types::SampleGrid;

/// Zero offset that maps FITS signed 16-bit storage onto unsigned samples.
///
/// FITS has no native unsigned 16-bit type; the convention is BITPIX=16
/// (signed) with BZERO=32768 and BSCALE=1, so a stored value `v` reads back
/// as the physical value `v + 32768`.
const U16_BZERO: i64 = 32768;

pub struct StandardFitsWriter;

impl FitsWriter for StandardFitsWriter {
    fn write_fits(
        &self,
        grid: &SampleGrid,
        output: &mut dyn Write,
        meta: &FitsMetadata,
    ) -> Result<()> {
        debug!("Encoding FITS image: {}x{}", grid.width(), grid.height());

        let mut header = FitsHeader::new();
        header.logical("SIMPLE", true);
        header.integer("BITPIX", 16);
        header.integer("NAXIS", 2);
        header.integer("NAXIS1", grid.width() as i64);
        header.integer("NAXIS2", grid.height() as i64);
        header.integer("BSCALE", 1);
        header.integer("BZERO", U16_BZERO);
        header.comment("Converted from 16-bit RAW (2 bytes/pixel).");
        header.history(&format!(
            "Source: {}; {}x{}; byteorder={}",
            meta.source.as_deref().unwrap_or("<memory>"),
            grid.width(),
            grid.height(),
            meta.byte_order,
        ));
        header.string("CREATOR", "raw2fits_rs");

        output
            .write_all(&header.into_blocks())
            .map_err(|e| ConversionError::WriteError(e.to_string()))?;

        // Data unit: big-endian i16, shifted down by BZERO, rows in grid
        // order, zero-padded to a whole block.
        let shifted: Vec<i16> = grid
            .samples()
            .iter()
            .map(|&s| (i64::from(s) - U16_BZERO) as i16)
            .collect();
        let mut data = vec![0u8; shifted.len() * 2];
        BigEndian::write_i16_into(&shifted, &mut data);

        let padding = (BLOCK_LEN - data.len() % BLOCK_LEN) % BLOCK_LEN;
        data.resize(data.len() + padding, 0);

        output
            .write_all(&data)
            .map_err(|e| ConversionError::WriteError(e.to_string()))?;

        debug!("FITS encoding complete");
        Ok(())
    }
}
