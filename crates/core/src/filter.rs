//! Spatial restoration filters for reconstructed noisy images.
//!
//! Four operators are available, with fixed parameters:
//! - `None`: identity (copy of the input)
//! - `Median`: 3x3 order-statistic filter
//! - `Mean`: 3x3 box average (separable)
//! - `Gaussian`: sigma = 1 kernel, truncated at radius 4 (separable)
//!
//! # Boundary Policy
//!
//! All kernels use nearest-edge clamping: out-of-bounds taps read the
//! closest in-bounds pixel. The same policy applies uniformly to every
//! filter.
//!
//! # Output Contract
//!
//! Output shape and dtype always equal the input's, with values rounded
//! and clamped to [0, 255]. An empty input returns the zero-filled
//! default image instead of erroring.

use crate::error::Error;
use crate::image::Image;
use std::fmt;
use std::str::FromStr;

/// Selection of restoration filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Identity: return a copy of the input
    None,
    /// 3x3 median filter
    Median,
    /// Gaussian filter with sigma = 1
    Gaussian,
    /// 3x3 mean (box) filter
    Mean,
}

impl FilterKind {
    /// All selectable filters, in menu order.
    pub const ALL: [FilterKind; 4] = [
        FilterKind::None,
        FilterKind::Median,
        FilterKind::Gaussian,
        FilterKind::Mean,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Median => "median (3x3)",
            FilterKind::Gaussian => "gaussian (sigma=1)",
            FilterKind::Mean => "mean (3x3)",
        }
    }

    /// Apply this filter to an image.
    ///
    /// Returns a new image of identical shape. An empty input yields the
    /// documented zero-filled default shape.
    pub fn apply(&self, image: &Image) -> Image {
        if image.is_empty() {
            return Image::default_zeros();
        }

        match self {
            FilterKind::None => image.clone(),
            FilterKind::Median => median3(image),
            FilterKind::Mean => mean3(image),
            FilterKind::Gaussian => gaussian_sigma1(image),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(FilterKind::None),
            "median" => Ok(FilterKind::Median),
            "gaussian" => Ok(FilterKind::Gaussian),
            "mean" => Ok(FilterKind::Mean),
            _ => Err(Error::Config(format!(
                "unknown filter '{s}' (expected none|median|gaussian|mean)"
            ))),
        }
    }
}

/// Clamp a coordinate to [0, limit - 1] (nearest-edge policy).
fn clamp_coord(value: isize, limit: usize) -> usize {
    value.clamp(0, limit as isize - 1) as usize
}

/// 3x3 median filter.
fn median3(image: &Image) -> Image {
    let (width, height) = (image.width(), image.height());
    let mut out = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let mut window = [0u8; 9];
            let mut i = 0;
            for dy in -1..=1isize {
                let sy = clamp_coord(y as isize + dy, height);
                for dx in -1..=1isize {
                    let sx = clamp_coord(x as isize + dx, width);
                    window[i] = image.get(sx, sy);
                    i += 1;
                }
            }
            window.sort_unstable();
            out.push(window[4]);
        }
    }

    Image::from_exact(width, height, out)
}

/// 3x3 mean filter, computed as two separable box passes.
fn mean3(image: &Image) -> Image {
    let weights = [1.0f32 / 3.0; 3];
    separable(image, &weights)
}

/// Gaussian filter with sigma = 1, truncated at 4 sigma (9-tap kernel).
fn gaussian_sigma1(image: &Image) -> Image {
    const RADIUS: usize = 4;

    let mut weights = [0.0f32; 2 * RADIUS + 1];
    let mut sum = 0.0f32;
    for (i, w) in weights.iter_mut().enumerate() {
        let d = i as f32 - RADIUS as f32;
        *w = (-0.5 * d * d).exp();
        sum += *w;
    }
    for w in weights.iter_mut() {
        *w /= sum;
    }

    separable(image, &weights)
}

/// Apply a symmetric 1-D kernel horizontally then vertically.
///
/// Intermediate values stay in f32; the final pass rounds and clamps
/// to [0, 255].
fn separable(image: &Image, weights: &[f32]) -> Image {
    let (width, height) = (image.width(), image.height());
    let half = (weights.len() / 2) as isize;

    // Horizontal pass
    let mut temp = vec![0.0f32; width * height];
    for y in 0..height {
        let row = image.row(y);
        for x in 0..width {
            let mut acc = 0.0f32;
            for (i, &w) in weights.iter().enumerate() {
                let sx = clamp_coord(x as isize + i as isize - half, width);
                acc += w * row[sx] as f32;
            }
            temp[y * width + x] = acc;
        }
    }

    // Vertical pass
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (i, &w) in weights.iter().enumerate() {
                let sy = clamp_coord(y as isize + i as isize - half, height);
                acc += w * temp[sy * width + x];
            }
            out.push(acc.round().clamp(0.0, 255.0) as u8);
        }
    }

    Image::from_exact(width, height, out)
}
