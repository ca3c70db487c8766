//! I/O helpers for the demo tools.
//!
//! - `load_stroke_json`: read a stroke captured as `[{"x": .., "y": ..}, ..]`.
//! - `save_accumulator_png`: write the vote grid as an 8-bit grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::accumulator::Accumulator;
use crate::stroke::Stroke;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a stroke from a JSON array of `{x, y}` objects.
pub fn load_stroke_json(path: &Path) -> Result<Stroke, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read stroke {}: {e}", path.display()))?;
    Stroke::from_json_str(&data)
        .map_err(|e| format!("Failed to parse stroke {}: {e}", path.display()))
}

/// Save the accumulator scaled so its maximum maps to 255. Rows are distance
/// bins, columns are angles.
pub fn save_accumulator_png(acc: &Accumulator, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let max = acc.max_value().max(1) as f64;
    let mut out = GrayImage::new(acc.cols() as u32, acc.rows() as u32);
    for r in 0..acc.rows() {
        for (c, &v) in acc.row(r).iter().enumerate() {
            let px = (v as f64 / max * 255.0).round().clamp(0.0, 255.0);
            out.put_pixel(c as u32, r as u32, Luma([px as u8]));
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
