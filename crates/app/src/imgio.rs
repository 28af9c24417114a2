//! Image file I/O for the shell.
//!
//! - `load_grayscale`: read any supported image file into an 8-bit
//!   grayscale buffer, resized to the configured square dimensions
//!   (Lanczos3, matching the reference loading path).
//! - `save_png`: write a simulation image to a grayscale PNG (lossless
//!   export of noisy/restored results).

use image::imageops::FilterType;
use image::{GrayImage, ImageBuffer};
use imgsim_core::image::Image;
use std::fs;
use std::path::Path;

/// Load an image from disk: decode, convert to 8-bit grayscale, and
/// resize to `size` x `size` pixels.
pub fn load_grayscale(path: &Path, size: usize) -> Result<Image, String> {
    let decoded = image::open(path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?
        .resize_exact(size as u32, size as u32, FilterType::Lanczos3)
        .into_luma8();

    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    Image::new(width, height, decoded.into_raw()).map_err(|e| e.to_string())
}

/// Save an image as a grayscale PNG, creating parent directories.
pub fn save_png(img: &Image, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;

    let buffer: GrayImage =
        ImageBuffer::from_raw(img.width() as u32, img.height() as u32, img.as_bytes().to_vec())
            .ok_or_else(|| "failed to create image buffer".to_string())?;

    buffer
        .save(path)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
