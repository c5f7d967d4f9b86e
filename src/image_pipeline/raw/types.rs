//! Raw frame data types

/// Byte order of the 16-bit samples in a raw frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first (LSB first)
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Little => write!(f, "little"),
            Self::Big => write!(f, "big"),
        }
    }
}

/// Declared layout of a headerless raw frame file.
///
/// Raw frames carry no header, so width, height and byte order must be
/// supplied by the caller for every conversion.
#[derive(Debug, Clone, Copy)]
pub struct RawFrameSpec {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Byte order of the 16-bit samples
    pub byte_order: ByteOrder,
}

impl RawFrameSpec {
    pub fn new(width: usize, height: usize, byte_order: ByteOrder) -> Self {
        Self {
            width,
            height,
            byte_order,
        }
    }

    /// Exact byte length a frame with this layout must have (2 bytes per
    /// sample), or `None` when `width * height * 2` overflows `usize`.
    pub fn frame_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(2))
    }
}

/// A decoded frame: `height * width` unsigned 16-bit samples in row-major
/// order, row 0 at the top.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    width: usize,
    height: usize,
    samples: Vec<u16>,
}

impl SampleGrid {
    /// Invariant upheld by the decoder: `samples.len() == width * height`.
    pub(crate) fn new(width: usize, height: usize, samples: Vec<u16>) -> Self {
        debug_assert_eq!(samples.len(), width * height);
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn sample(&self, row: usize, col: usize) -> u16 {
        self.samples[row * self.width + col]
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }
}
