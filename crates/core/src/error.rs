//! Error types for the imgsim pipeline.
//!
//! All operations return structured errors rather than panicking.
//! Malformed inputs (bad buffer lengths, out-of-range probabilities,
//! non-bit values) are rejected up front; everything downstream of
//! validation degrades to a documented default instead of failing.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Image: buffer construction with inconsistent dimensions
/// - Codec: bitstream construction from invalid bit values
/// - Channel: invalid noise parameters
/// - I/O: file system operations (shell-side loading and saving)
#[derive(Debug, Error)]
pub enum Error {
    /// Image buffer error (e.g., data length inconsistent with dimensions)
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// Bit codec error (e.g., non-bit value in a raw bit sequence)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Noise channel error (e.g., probability outside [0, 1])
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Image buffer errors.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Pixel buffer length doesn't match width * height
    #[error("dimension mismatch: {width}x{height} needs {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Bit codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A raw bit sequence contained a value other than 0 or 1
    #[error("invalid bit value {value} at position {position}")]
    InvalidBitValue { position: usize, value: u8 },
}

/// Noise channel errors.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Flip probability outside the valid [0.0, 1.0] range
    #[error("flip probability {value} outside [0.0, 1.0]")]
    InvalidProbability { value: f64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
