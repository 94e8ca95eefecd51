//! Decoding and debug output helpers.
//!
//! - `decode_rgba` / `load_rgba_image`: decode PNG/JPEG/WebP/... into an owned
//!   RGBA buffer.
//! - `save_grayscale_f32`: write an `ImageF32` to a grayscale PNG, rescaled by
//!   its maximum.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageView, RgbaBuffer};
use crate::error::DetectionError;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decode an in-memory encoded image (format guessed from its header).
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaBuffer, DetectionError> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    Ok(RgbaBuffer::from(img))
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaBuffer, DetectionError> {
    let img = image::open(path)?.into_rgba8();
    Ok(RgbaBuffer::from(img))
}

/// Save a float plane to a grayscale PNG, mapping `[0, max]` to `[0, 255]`.
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let max = image.max_value();
    let gain = if max > 0.0 { 255.0 / max } else { 0.0 };
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * gain).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
