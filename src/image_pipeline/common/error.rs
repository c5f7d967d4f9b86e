use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    WriteError(String),

    #[error("Failed to decode raw frame: {0}")]
    DecodeError(String),

    #[error(
        "File size mismatch: expected {expected} bytes for {width}x{height}x16b, but got {actual} bytes"
    )]
    SizeMismatch {
        expected: usize,
        actual: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid input path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
