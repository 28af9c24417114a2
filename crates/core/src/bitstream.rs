//! Bit codec: image bytes to a flat bit sequence and back.
//!
//! Each pixel byte expands into 8 bits in MSB-first order, concatenated
//! row-major. Bits are stored one per `u8` element (value 0 or 1) so the
//! channel can flip them independently and callers can inspect raw levels.
//!
//! # Length Policy
//!
//! Packing is total: a bitstream of any length decodes to any target shape.
//! - A trailing partial byte is padded with zeros in its low bits
//!   (the MSB-first writer's padding rule).
//! - Too few bytes for the target shape: missing bytes are zero.
//! - Too many bytes: excess trailing bytes are truncated.
//!
//! Round-tripping `decode(encode(img), img.shape)` is exact, always.

use crate::error::{CodecError, Result};
use crate::image::Image;

/// Flat sequence of single-bit values (each element is 0 or 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitstream {
    bits: Vec<u8>,
}

impl Bitstream {
    /// Create an empty bitstream.
    pub fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create a bitstream from raw bit values.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidBitValue` if any element is not 0 or 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        for (position, &value) in bits.iter().enumerate() {
            if value > 1 {
                return Err(CodecError::InvalidBitValue { position, value }.into());
            }
        }
        Ok(Self { bits })
    }

    /// Encode an image: expand each pixel byte into 8 bits, MSB first.
    pub fn from_image(image: &Image) -> Self {
        let mut bits = Vec::with_capacity(image.len() * 8);
        for &byte in image.as_bytes() {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1);
            }
        }
        Self { bits }
    }

    /// Decode into an image of the given shape.
    ///
    /// Bits are packed 8-per-byte MSB-first, then fitted to
    /// `width * height` bytes: excess trailing bytes are truncated,
    /// missing bytes are zero-filled.
    pub fn to_image(&self, width: usize, height: usize) -> Image {
        let mut bytes = self.pack();
        bytes.resize(width * height, 0);
        Image::from_exact(width, height, bytes)
    }

    /// Pack the bit sequence into bytes, MSB first.
    ///
    /// A trailing partial byte is zero-padded in its low bits.
    fn pack(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.bits.len().div_ceil(8));
        for chunk in self.bits.chunks(8) {
            let mut byte = 0u8;
            for (i, &bit) in chunk.iter().enumerate() {
                byte |= bit << (7 - i);
            }
            bytes.push(byte);
        }
        bytes
    }

    /// Number of bits in the stream.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit value at `index` (0 or 1).
    pub fn bit(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// Borrow the bit values.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Logical complement: every bit inverted.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&b| 1 - b).collect(),
        }
    }

    /// Fit the stream to exactly `len` bits: truncate if longer, pad with
    /// zero bits if shorter.
    ///
    /// This is the canonical alignment applied before comparing a
    /// re-encoded stream against a reference of fixed length.
    pub fn aligned_to(&self, len: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.resize(len, 0);
        Self { bits }
    }

    /// Internal constructor for streams built bit-by-bit by the channel.
    pub(crate) fn from_raw(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }
}
