//! Hero image previews.
//!
//! Placeholder hero canvases and headline-band overlays. Colors are derived
//! from a SHA-256 digest of the description so the same brief always renders
//! the same preview.

use std::path::Path;

use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::domain::brief::Platform;

/// Canvas dimensions (pixels) for a platform's primary placement.
pub fn platform_canvas(platform: Platform) -> (u32, u32) {
    match platform {
        Platform::Facebook => (1080, 1080),
        Platform::Instagram => (1080, 1350),
        Platform::TikTok => (1080, 1920),
        Platform::YouTube => (1280, 720),
        Platform::LinkedIn => (1200, 628),
        Platform::X => (1280, 720),
        Platform::Display => (900, 500),
    }
}

/// Aspect ratio guidance handed to the video prompt.
pub fn aspect_ratio_hint(platform: Platform) -> &'static str {
    match platform {
        Platform::Facebook => "1:1 or 4:5",
        Platform::Instagram => "4:5 (feed) or 9:16 (Reels)",
        Platform::TikTok => "9:16",
        Platform::YouTube => "16:9",
        Platform::LinkedIn => "1.91:1 or 1:1",
        Platform::X => "16:9",
        Platform::Display => "300x250 / 728x90 / 160x600",
    }
}

/// Pastel base color for a description: each channel in 200..=245.
fn pastel_color(description: &str) -> Rgba<u8> {
    let digest = Sha256::digest(description.trim().as_bytes());
    let channel = |b: u8| 200 + (b % 46);
    Rgba([channel(digest[0]), channel(digest[1]), channel(digest[2]), 255])
}

fn darken(color: Rgba<u8>, amount: u8) -> Rgba<u8> {
    Rgba([
        color.0[0].saturating_sub(amount),
        color.0[1].saturating_sub(amount),
        color.0[2].saturating_sub(amount),
        color.0[3],
    ])
}

/// Fill an axis-aligned rectangle, clamped to the image bounds.
fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x1 = (x0 + w).min(img.width());
    let y1 = (y0 + h).min(img.height());
    for y in y0.min(img.height())..y1 {
        for x in x0.min(img.width())..x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Alpha-blend a dark band over a region of the image.
fn blend_rect(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, alpha: f32) {
    let x1 = (x0 + w).min(img.width());
    let y1 = (y0 + h).min(img.height());
    for y in y0.min(img.height())..y1 {
        for x in x0.min(img.width())..x1 {
            let px = img.get_pixel(x, y);
            let blended = Rgba([
                (px.0[0] as f32 * (1.0 - alpha)) as u8,
                (px.0[1] as f32 * (1.0 - alpha)) as u8,
                (px.0[2] as f32 * (1.0 - alpha)) as u8,
                px.0[3],
            ]);
            img.put_pixel(x, y, blended);
        }
    }
}

/// Deterministic placeholder hero: pastel canvas sized for the platform, a
/// darker centered headline band, and a footer tag strip.
pub fn placeholder_hero(description: &str, platform: Platform) -> RgbaImage {
    let (width, height) = platform_canvas(platform);
    let base = pastel_color(description);
    let mut img = RgbaImage::from_pixel(width, height, base);

    // Centered headline band
    let band_h = height / 6;
    let band_w = (width * 3) / 4;
    let band_x = (width - band_w) / 2;
    let band_y = (height - band_h) / 2;
    fill_rect(&mut img, band_x, band_y, band_w, band_h, darken(base, 40));

    // Footer tag strip
    let strip_h = height / 16;
    fill_rect(&mut img, 0, height - strip_h, width, strip_h, darken(base, 80));

    img
}

/// Stamp a translucent headline band across the lower portion of an image.
///
/// Band height scales with headline length to approximate the space the text
/// would occupy. Degrades gracefully on tiny images: the band is clamped to
/// the image bounds.
pub fn overlay_headline_band(img: &mut RgbaImage, headline: &str) {
    let height = img.height();
    if height == 0 || img.width() == 0 {
        return;
    }

    // Roughly one extra text line per 40 characters.
    let lines = (headline.chars().count() / 40 + 1).min(4) as u32;
    let band_h = ((height / 8) * lines).clamp(1, height);
    let band_y = height.saturating_sub(band_h + height / 12);
    blend_rect(img, 0, band_y, img.width(), band_h, 0.65);
}

/// Load a user-supplied hero image, falling back to the placeholder when the
/// file is missing or undecodable. Returns the image and whether it degraded.
pub fn load_or_placeholder(
    path: &Path,
    description: &str,
    platform: Platform,
) -> (RgbaImage, bool) {
    match image::open(path) {
        Ok(img) => (img.to_rgba8(), false),
        Err(e) => {
            eprintln!(
                "Warning: could not read hero image '{}', falling back to placeholder ({})",
                path.display(),
                e
            );
            (placeholder_hero(description, platform), true)
        }
    }
}

/// Write the image as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), AppError> {
    img.save(path)?;
    Ok(())
}
