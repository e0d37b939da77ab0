//! Disk I/O for the command-line tool: grayscale PNG/JPEG in, PNG grids and
//! JSON reports out. Errors are path-qualified strings.
use super::{GrayImageU8, ImageF32, ImageView};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let gray = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    Ok(GrayImageU8::new(w, h, gray.into_raw()))
}

/// Encode any grid as an 8-bit grayscale PNG, mapping pixels through `to_u8`.
fn save_grid<I, F>(grid: &I, path: &Path, to_u8: F) -> Result<(), String>
where
    I: ImageView,
    F: Fn(I::Pixel) -> u8,
{
    ensure_parent_dir(path)?;
    let out = GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Luma([to_u8(grid.row(y as usize)[x as usize])])
    });
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a float grid (magnitude, smoothed image) rounded and clamped to `[0, 255]`.
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    save_grid(image, path, |v| v.round().clamp(0.0, 255.0) as u8)
}

/// Save a label grid or edge map as-is.
pub fn save_grayscale_u8<I: ImageView<Pixel = u8>>(grid: &I, path: &Path) -> Result<(), String> {
    save_grid(grid, path, |v| v)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display())),
        _ => Ok(()),
    }
}
