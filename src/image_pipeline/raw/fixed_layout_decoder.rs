//! Fixed-layout raw frame decoder.
//!
//! Raw frames are headerless: a flat sequence of `width * height` unsigned
//! 16-bit samples, 2 bytes per sample, row-major, top row first. The decoder
//! validates the declared layout against the buffer length before touching
//! the data, so a frame either decodes completely or not at all.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::decoder::FrameDecoder;
use crate::image_pipeline::raw::types::{ByteOrder, RawFrameSpec, SampleGrid};

pub struct FixedLayoutDecoder;

impl FrameDecoder for FixedLayoutDecoder {
    /// Decodes a raw frame buffer into a sample grid.
    ///
    /// Byte offset `2 * (row * width + col)` maps to `grid[row][col]`; there
    /// is no transposition and no flipping.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` - width or height is zero, or so large the
    ///   frame length overflows (checked before the buffer is inspected)
    /// * `SizeMismatch` - buffer length differs from `width * height * 2`
    fn decode(&self, data: &[u8], spec: &RawFrameSpec) -> Result<SampleGrid> {
        if spec.width == 0 || spec.height == 0 {
            return Err(ConversionError::InvalidDimensions(spec.width, spec.height));
        }

        let expected = spec
            .frame_len()
            .ok_or(ConversionError::InvalidDimensions(spec.width, spec.height))?;
        if data.len() != expected {
            return Err(ConversionError::SizeMismatch {
                expected,
                actual: data.len(),
                width: spec.width,
                height: spec.height,
            });
        }

        debug!(
            "Decoding raw frame: {}x{}, {:?} byte order",
            spec.width, spec.height, spec.byte_order
        );

        let mut samples = vec![0u16; spec.width * spec.height];
        match spec.byte_order {
            ByteOrder::Little => LittleEndian::read_u16_into(data, &mut samples),
            ByteOrder::Big => BigEndian::read_u16_into(data, &mut samples),
        }

        Ok(SampleGrid::new(spec.width, spec.height, samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;

    fn encode(samples: &[u16], byte_order: ByteOrder) -> Vec<u8> {
        let mut buf = Vec::with_capacity(samples.len() * 2);
        for &s in samples {
            match byte_order {
                ByteOrder::Little => buf.write_u16::<LittleEndian>(s).unwrap(),
                ByteOrder::Big => buf.write_u16::<BigEndian>(s).unwrap(),
            }
        }
        buf
    }

    #[test]
    fn test_decode_2x2_little_endian() {
        let spec = RawFrameSpec::new(2, 2, ByteOrder::Little);
        let data = encode(&[0, 1, 2, 3], ByteOrder::Little);

        let grid = FixedLayoutDecoder.decode(&data, &spec).unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.sample(0, 0), 0);
        assert_eq!(grid.sample(0, 1), 1);
        assert_eq!(grid.sample(1, 0), 2);
        assert_eq!(grid.sample(1, 1), 3);
    }

    #[test]
    fn test_byte_offset_maps_to_row_major_position() {
        let width = 5;
        let height = 3;
        let samples: Vec<u16> = (0..width * height).map(|i| (i * 257) as u16).collect();
        let data = encode(&samples, ByteOrder::Big);
        let spec = RawFrameSpec::new(width, height, ByteOrder::Big);

        let grid = FixedLayoutDecoder.decode(&data, &spec).unwrap();

        for row in 0..height {
            for col in 0..width {
                let offset = 2 * (row * width + col);
                let from_bytes = u16::from_be_bytes([data[offset], data[offset + 1]]);
                assert_eq!(grid.sample(row, col), from_bytes);
            }
        }
    }

    #[test]
    fn test_round_trip_both_byte_orders() {
        let samples: Vec<u16> = vec![0, 1, 255, 256, 0x1234, 0xFFFF];
        let spec_le = RawFrameSpec::new(3, 2, ByteOrder::Little);
        let spec_be = RawFrameSpec::new(3, 2, ByteOrder::Big);

        for (spec, order) in [(spec_le, ByteOrder::Little), (spec_be, ByteOrder::Big)] {
            let data = encode(&samples, order);
            let grid = FixedLayoutDecoder.decode(&data, &spec).unwrap();
            let re_encoded = encode(grid.samples(), order);
            assert_eq!(re_encoded, data);
        }
    }

    #[test]
    fn test_endianness_sensitivity() {
        // Bytes [0x01, 0x00] decode to 1 little-endian, 256 big-endian.
        let data = vec![0x01, 0x00];

        let le = FixedLayoutDecoder
            .decode(&data, &RawFrameSpec::new(1, 1, ByteOrder::Little))
            .unwrap();
        let be = FixedLayoutDecoder
            .decode(&data, &RawFrameSpec::new(1, 1, ByteOrder::Big))
            .unwrap();

        assert_eq!(le.sample(0, 0), 1);
        assert_eq!(be.sample(0, 0), 256);
    }

    #[test]
    fn test_size_mismatch_short_buffer() {
        let spec = RawFrameSpec::new(1920, 1080, ByteOrder::Little);
        let data = vec![0u8; spec.frame_len().unwrap() - 1];

        let err = FixedLayoutDecoder.decode(&data, &spec).unwrap_err();

        match err {
            ConversionError::SizeMismatch { expected, actual, .. } => {
                assert_eq!(expected, 1920 * 1080 * 2);
                assert_eq!(actual, 1920 * 1080 * 2 - 1);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_size_mismatch_long_buffer() {
        let spec = RawFrameSpec::new(2, 2, ByteOrder::Little);
        let data = vec![0u8; 10];

        let err = FixedLayoutDecoder.decode(&data, &spec).unwrap_err();
        assert!(matches!(err, ConversionError::SizeMismatch { .. }));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        // width * height * 2 would wrap; must fail cleanly, not panic or
        // demand a nonsense byte count.
        let spec = RawFrameSpec::new(usize::MAX, 2, ByteOrder::Little);

        let err = FixedLayoutDecoder.decode(&[], &spec).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDimensions(..)));
    }

    #[test]
    fn test_zero_dimensions_rejected_before_size_check() {
        // An empty buffer would pass the size check for 0x0, so the
        // dimension check has to come first.
        let err = FixedLayoutDecoder
            .decode(&[], &RawFrameSpec::new(0, 0, ByteOrder::Little))
            .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDimensions(0, 0)));

        let err = FixedLayoutDecoder
            .decode(&[], &RawFrameSpec::new(4, 0, ByteOrder::Little))
            .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidDimensions(4, 0)));
    }
}
