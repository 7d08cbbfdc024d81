// SPDX-License-Identifier: MPL-2.0
//! Image sourcing for the demo showcase.
//!
//! The demo either loads a TOML manifest describing real image files or
//! falls back to generated placeholder gradients, so it runs without any
//! assets on disk.

use crate::error::{Error, Result};
use crate::stack::StackImage;
use iced::widget::image::Handle;
use image_rs::{Rgba, RgbaImage};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Pixel size of generated placeholder images.
const PLACEHOLDER_WIDTH: u32 = 800;
const PLACEHOLDER_HEIGHT: u32 = 600;

/// A gallery manifest: a list of `[[image]]` entries.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "image")]
    images: Vec<ManifestEntry>,
}

/// One manifest entry. Paths are resolved relative to the manifest file.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    path: PathBuf,
    alt: String,
    caption: String,
}

/// Loads a gallery manifest and decodes every image it names.
pub fn load_manifest(manifest_path: &Path) -> Result<Vec<StackImage>> {
    let text = std::fs::read_to_string(manifest_path)?;
    let manifest: Manifest = toml::from_str(&text)?;

    if manifest.images.is_empty() {
        return Err(Error::Manifest(format!(
            "{} lists no images",
            manifest_path.display()
        )));
    }

    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    manifest
        .images
        .into_iter()
        .map(|entry| {
            let decoded = image_rs::open(base.join(&entry.path))?.into_rgba8();
            let (width, height) = decoded.dimensions();
            Ok(StackImage::new(
                Handle::from_rgba(width, height, decoded.into_raw()),
                entry.alt,
                entry.caption,
            ))
        })
        .collect()
}

/// Generates `count` gradient placeholders. `seed` offsets the hue so
/// every demo section gets a distinct set, consistent across runs.
#[must_use]
pub fn placeholders(count: usize, seed: u32) -> Vec<StackImage> {
    (0..count)
        .map(|i| {
            let hue = ((seed as f32 * 37.0) + (i as f32 * 61.0)) % 360.0;
            let pixels = gradient(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, hue);
            StackImage::new(
                Handle::from_rgba(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, pixels.into_raw()),
                format!("Placeholder photograph {}", i + 1),
                format!("Generated placeholder {}", i + 1),
            )
        })
        .collect()
}

/// Diagonal two-tone gradient around the given hue.
fn gradient(width: u32, height: u32, hue: f32) -> RgbaImage {
    let (r1, g1, b1) = hue_to_rgb(hue);
    let (r2, g2, b2) = hue_to_rgb((hue + 40.0) % 360.0);

    RgbaImage::from_fn(width, height, |x, y| {
        let t = (x as f32 / width as f32 + y as f32 / height as f32) / 2.0;
        let mix = |a: f32, b: f32| ((a + (b - a) * t) * 255.0) as u8;
        Rgba([mix(r1, r2), mix(g1, g2), mix(b1, b2), 255])
    })
}

/// Converts a hue (degrees) to an RGB triple at full saturation and
/// moderate lightness.
fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    let h = hue / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    // Soften toward mid-gray so captions stay readable on top.
    let soften = |v: f32| 0.25 + v * 0.6;
    (soften(r), soften(g), soften(b))
}
