//! Colorimetric background classification and removal.
//!
//! Logos usually arrive on a flat background (white, grey, a brand color).
//! The classifier samples the four corner pixels and takes the most frequent
//! corner color as the background reference; the remover then grades every
//! pixel's alpha by its Manhattan distance to that reference, producing a
//! hard cutout with a soft transition band instead of a jagged edge.
//!
//! This is a best-effort heuristic, not content-aware segmentation: it
//! assumes a single dominant flat background and nothing more.

use image::{Rgb, RgbaImage};
use rayon::prelude::*;

/// Pick the most frequent corner color as the background reference.
///
/// Corners are visited in top-left, top-right, bottom-left, bottom-right
/// order; frequency ties keep the first-seen color. Returns `None` for an
/// image with no extractable corners (zero width or height).
#[must_use]
pub fn dominant_corner_color(image: &RgbaImage) -> Option<Rgb<u8>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let last_x = width - 1;
    let last_y = height - 1;
    let corners: [Rgb<u8>; 4] = [(0, 0), (last_x, 0), (0, last_y), (last_x, last_y)].map(|(x, y)| {
        let px = image.get_pixel(x, y);
        Rgb([px[0], px[1], px[2]])
    });

    let mut best = corners[0];
    let mut best_count = 0usize;
    for candidate in corners {
        let count = corners.iter().filter(|c| **c == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    Some(best)
}

/// Manhattan distance between a pixel's RGB channels and the reference.
fn color_distance(px: &[u8], reference: Rgb<u8>) -> u32 {
    (i32::from(px[0]) - i32::from(reference[0])).unsigned_abs()
        + (i32::from(px[1]) - i32::from(reference[1])).unsigned_abs()
        + (i32::from(px[2]) - i32::from(reference[2])).unsigned_abs()
}

/// Grade every pixel's alpha by its distance to the background color.
///
/// Policy, with `d` the Manhattan RGB distance to `background`:
/// - `d < tolerance`: fully transparent.
/// - `tolerance <= d < 1.5 * tolerance`: linear ramp
///   `alpha = 255 * (d - tolerance) / (0.5 * tolerance)`, capped at 255.
/// - otherwise: alpha untouched.
///
/// RGB channels are never modified. A tolerance of 0 leaves the whole image
/// untouched (the ramp band is empty and no distance is below zero). The
/// map is elementwise with no spatial dependency, so pixels are processed
/// in parallel.
pub fn remove_background(image: &mut RgbaImage, background: Rgb<u8>, tolerance: u32) {
    if tolerance == 0 {
        return;
    }

    image.par_chunks_exact_mut(4).for_each(|px| {
        let distance = color_distance(px, background);
        if distance < tolerance {
            px[3] = 0;
        } else if 2 * distance < tolerance.saturating_mul(3) {
            // Soft transition band between tolerance and 1.5x tolerance.
            let ramp = 510 * (distance - tolerance) / tolerance;
            #[allow(clippy::cast_possible_truncation)]
            {
                px[3] = ramp.min(255) as u8;
            }
        }
    });
}
