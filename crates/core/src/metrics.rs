//! Error measurement between transmitted and received data.
//!
//! Two rates are reported, both as percentages rounded to 2 decimal
//! places:
//! - pixel error rate: fraction of pixels whose absolute difference is
//!   non-zero
//! - bit error rate (BER): fraction of mismatched bits
//!
//! # Truncation Policy
//!
//! Comparing unequal-length inputs is an explicit truncation, never
//! silent loss: bit sequences compare the overlapping prefix, images the
//! overlapping top-left region, and the denominator is the overlap size.
//! Empty input on either side yields 0.0.

use crate::bitstream::Bitstream;
use crate::image::Image;

/// Round a rate to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of pixels that differ between two images.
///
/// Compares the overlapping top-left region when shapes diverge.
/// Returns 0.0 when either image is empty.
pub fn pixel_error_rate(original: &Image, restored: &Image) -> f64 {
    if original.is_empty() || restored.is_empty() {
        return 0.0;
    }

    let width = original.width().min(restored.width());
    let height = original.height().min(restored.height());
    let total = width * height;
    if total == 0 {
        return 0.0;
    }

    let mut errors = 0usize;
    for y in 0..height {
        for x in 0..width {
            if original.get(x, y) != restored.get(x, y) {
                errors += 1;
            }
        }
    }

    round2(100.0 * errors as f64 / total as f64)
}

/// Percentage of mismatched bits over the shorter of the two sequences.
///
/// Returns 0.0 when either sequence is empty.
pub fn bit_error_rate(reference: &Bitstream, received: &Bitstream) -> f64 {
    let overlap = reference.len().min(received.len());
    if overlap == 0 {
        return 0.0;
    }

    let errors = reference.as_slice()[..overlap]
        .iter()
        .zip(&received.as_slice()[..overlap])
        .filter(|(a, b)| a != b)
        .count();

    round2(100.0 * errors as f64 / overlap as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(values: &[u8]) -> Bitstream {
        Bitstream::from_bits(values.to_vec()).unwrap()
    }

    #[test]
    fn test_identical_images_zero_rate() {
        let img = Image::new(4, 4, (0u8..16).collect()).unwrap();
        assert_eq!(pixel_error_rate(&img, &img), 0.0);
    }

    #[test]
    fn test_pixel_rate_counts_differing_pixels() {
        let a = Image::new(2, 2, vec![10, 20, 30, 40]).unwrap();
        let b = Image::new(2, 2, vec![10, 21, 30, 41]).unwrap();

        // 2 of 4 pixels differ
        assert_eq!(pixel_error_rate(&a, &b), 50.0);
    }

    #[test]
    fn test_pixel_rate_rounding() {
        // 1 of 3 pixels differs: 33.333...% -> 33.33
        let a = Image::new(3, 1, vec![0, 0, 0]).unwrap();
        let b = Image::new(3, 1, vec![1, 0, 0]).unwrap();

        assert_eq!(pixel_error_rate(&a, &b), 33.33);
    }

    #[test]
    fn test_pixel_rate_empty_input() {
        let empty = Image::new(0, 0, Vec::new()).unwrap();
        let img = Image::new(2, 2, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(pixel_error_rate(&empty, &img), 0.0);
        assert_eq!(pixel_error_rate(&img, &empty), 0.0);
    }

    #[test]
    fn test_pixel_rate_shape_divergence_overlap() {
        // 2x2 vs 3x2: only the 2x2 overlap is compared
        let a = Image::new(2, 2, vec![5, 5, 5, 5]).unwrap();
        let b = Image::new(3, 2, vec![5, 5, 9, 5, 0, 9]).unwrap();

        // Overlap pixels: (0,0)=5, (1,0)=5, (0,1)=5, (1,1)=0 -> 1 of 4
        assert_eq!(pixel_error_rate(&a, &b), 25.0);
    }

    #[test]
    fn test_identical_bits_zero_rate() {
        let stream = bits(&[1, 0, 1, 1]);
        assert_eq!(bit_error_rate(&stream, &stream), 0.0);
    }

    #[test]
    fn test_bit_rate_counts_mismatches() {
        let a = bits(&[1, 0, 1, 0]);
        let b = bits(&[1, 1, 1, 1]);

        assert_eq!(bit_error_rate(&a, &b), 50.0);
    }

    #[test]
    fn test_bit_rate_unequal_lengths_prefix() {
        // Only the first 4 positions are compared; 1 differs
        let a = bits(&[1, 0, 1, 0]);
        let b = bits(&[1, 0, 1, 1, 1, 1, 1, 1]);

        assert_eq!(bit_error_rate(&a, &b), 25.0);
    }

    #[test]
    fn test_bit_rate_empty_input() {
        let stream = bits(&[1, 0]);
        assert_eq!(bit_error_rate(&Bitstream::empty(), &stream), 0.0);
        assert_eq!(bit_error_rate(&stream, &Bitstream::empty()), 0.0);
    }

    #[test]
    fn test_full_complement_is_hundred_percent() {
        let stream = bits(&[1, 0, 1, 0, 0, 1]);
        assert_eq!(bit_error_rate(&stream, &stream.complement()), 100.0);
    }
}
