//! Aspect-preserving square normalization.
//!
//! Logos come in every aspect ratio; the compositor wants a predictable
//! square. The normalizer fits the content into a fully transparent S x S
//! canvas with a uniform scale (never stretched), centered, and picks the
//! resampling family by direction: Lanczos when shrinking (controls
//! aliasing), cubic when growing (controls ringing).

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resampling filter for a uniform scale factor.
///
/// Lanczos for downscaling (`scale < 1`), Catmull-Rom cubic for upscaling.
#[must_use]
pub fn resample_filter(scale: f32) -> FilterType {
    if scale < 1.0 {
        FilterType::Lanczos3
    } else {
        FilterType::CatmullRom
    }
}

/// Fit the image into a transparent `target_size` x `target_size` canvas.
///
/// The content is scaled by `min(S/width, S/height)` so the aspect ratio is
/// preserved, then pasted centered with alpha-over compositing (the canvas
/// starts fully transparent, so this is a copy weighted by source alpha).
/// Offsets are floored, matching integer centering.
///
/// A resize to the source's own dimensions is skipped entirely, so an
/// already-square image of the target size passes through bit-exact.
/// Degenerate inputs (empty image or zero target) yield an empty
/// transparent canvas instead of failing.
#[must_use]
pub fn square_with_padding(image: &RgbaImage, target_size: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if target_size == 0 || width == 0 || height == 0 {
        return RgbaImage::new(target_size, target_size);
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = (target_size as f32 / width as f32).min(target_size as f32 / height as f32);

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (new_width, new_height) = (
        ((width as f32 * scale) as u32).max(1),
        ((height as f32 * scale) as u32).max(1),
    );

    let resized = if (new_width, new_height) == (width, height) {
        image.clone()
    } else {
        imageops::resize(image, new_width, new_height, resample_filter(scale))
    };

    let mut canvas = RgbaImage::new(target_size, target_size);
    let x_offset = i64::from((target_size - new_width) / 2);
    let y_offset = i64::from((target_size - new_height) / 2);
    imageops::overlay(&mut canvas, &resized, x_offset, y_offset);
    canvas
}
