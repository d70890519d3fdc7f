//! Final placement of the processed logo on the base illustration.
//!
//! The logo is resized to its target footprint and pasted centered on the
//! caller's anchor with its own alpha channel as the blend mask:
//! `out = alpha * logo + (1 - alpha) * base` for every channel. Regions
//! falling outside the base image are silently clipped; the base itself is
//! never mutated.

use image::{imageops, RgbaImage};

use crate::normalize::resample_filter;

/// Resize the logo to `width` x `height` and alpha-blend it onto a copy of
/// `base`, centered on `(anchor_x, anchor_y)` in base coordinates.
///
/// The paste position is `(anchor_x - width / 2, anchor_y - height / 2)`
/// with floor division; negative or overflowing regions are clipped to the
/// base extent. Logo pixels with alpha 0 leave the base untouched, so a
/// fully transparent logo reproduces the base byte for byte. A zero target
/// footprint or an empty logo also reproduces the base unchanged.
///
/// The resampling filter follows the same downscale/upscale rule as square
/// normalization.
#[must_use]
pub fn overlay_logo(
    base: &RgbaImage,
    logo: &RgbaImage,
    width: u32,
    height: u32,
    anchor_x: i32,
    anchor_y: i32,
) -> RgbaImage {
    let mut out = base.clone();
    if width == 0 || height == 0 || logo.width() == 0 || logo.height() == 0 {
        return out;
    }

    #[allow(clippy::cast_precision_loss)]
    let scale =
        (width as f32 / logo.width() as f32).min(height as f32 / logo.height() as f32);
    let resized = imageops::resize(logo, width, height, resample_filter(scale));

    let left = i64::from(anchor_x) - i64::from(width / 2);
    let top = i64::from(anchor_y) - i64::from(height / 2);
    let base_w = i64::from(base.width());
    let base_h = i64::from(base.height());

    for (dx, dy, px) in resized.enumerate_pixels() {
        let x = left + i64::from(dx);
        let y = top + i64::from(dy);
        if x < 0 || y < 0 || x >= base_w || y >= base_h {
            continue;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x, y) = (x as u32, y as u32);

        match px[3] {
            0 => {}
            255 => out.put_pixel(x, y, *px),
            alpha => {
                let weight = f32::from(alpha) / 255.0;
                let inv = 1.0 - weight;
                let bg = out.get_pixel_mut(x, y);
                for ch in 0..4 {
                    let blended = f32::from(px[ch]) * weight + f32::from(bg[ch]) * inv;
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    {
                        bg[ch] = blended.clamp(0.0, 255.0) as u8;
                    }
                }
            }
        }
    }

    out
}
