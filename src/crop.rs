//! Content-aware cropping.
//!
//! After background removal the interesting part of a logo is the set of
//! pixels with non-zero alpha. The cropper finds their tight bounding box,
//! expands it by 5% relative padding so anti-aliased edges survive, and
//! crops to that region.

use image::{imageops, RgbaImage};

use crate::error::{Error, Result};

/// Half-open, axis-aligned pixel rectangle, always within image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Left edge (inclusive).
    pub x1: u32,
    /// Top edge (inclusive).
    pub y1: u32,
    /// Right edge (exclusive).
    pub x2: u32,
    /// Bottom edge (exclusive).
    pub y2: u32,
}

impl BoundingBox {
    /// Width of the box in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    /// Height of the box in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Expand symmetrically by `padding` on each side, clamped to the
    /// `bounds_w` x `bounds_h` image extent.
    #[must_use]
    pub fn expanded(self, padding: u32, bounds_w: u32, bounds_h: u32) -> Self {
        Self {
            x1: self.x1.saturating_sub(padding),
            y1: self.y1.saturating_sub(padding),
            x2: (self.x2 + padding).min(bounds_w),
            y2: (self.y2 + padding).min(bounds_h),
        }
    }
}

/// Tight bounding box of all pixels with alpha > 0.
///
/// Returns `None` when the image is empty or fully transparent.
#[must_use]
pub fn content_bounds(image: &RgbaImage) -> Option<BoundingBox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, px) in image.enumerate_pixels() {
        if px[3] > 0 {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            found = true;
        }
    }

    found.then(|| BoundingBox {
        x1: min_x,
        y1: min_y,
        x2: max_x + 1,
        y2: max_y + 1,
    })
}

/// Crop to the opaque content plus 5% relative padding.
///
/// The padding is `min(width, height) / 20` of the *input* image, clamped
/// to the image bounds, so anti-aliased edges from the background removal
/// ramp are not cut off. The output is never larger than the input and
/// never zero-area.
///
/// # Errors
///
/// Returns [`Error::DegenerateImage`] when the image has no pixel with
/// alpha > 0 (including the zero-size case). Callers that must not fail
/// can treat this as "skip the crop" and keep the input; the pipeline
/// does exactly that.
pub fn smart_crop(image: &RgbaImage) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let bbox = content_bounds(image).ok_or(Error::DegenerateImage { width, height })?;

    let padding = width.min(height) / 20;
    let padded = bbox.expanded(padding, width, height);

    Ok(imageops::crop_imm(image, padded.x1, padded.y1, padded.width(), padded.height()).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn content_bounds_encloses_opaque_pixels() {
        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(3, 4, Rgba([255, 0, 0, 255]));
        img.put_pixel(6, 7, Rgba([255, 0, 0, 128]));

        let bbox = content_bounds(&img).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                x1: 3,
                y1: 4,
                x2: 7,
                y2: 8
            }
        );
        assert_eq!(bbox.width(), 4);
        assert_eq!(bbox.height(), 4);
    }

    #[test]
    fn content_bounds_of_transparent_image_is_none() {
        let img = RgbaImage::new(8, 8);
        assert!(content_bounds(&img).is_none());
    }

    #[test]
    fn expanded_clamps_to_image_bounds() {
        let bbox = BoundingBox {
            x1: 1,
            y1: 0,
            x2: 9,
            y2: 10,
        };
        let padded = bbox.expanded(3, 10, 10);
        assert_eq!(
            padded,
            BoundingBox {
                x1: 0,
                y1: 0,
                x2: 10,
                y2: 10
            }
        );
    }

    #[test]
    fn smart_crop_keeps_padding_around_content() {
        // 40x40: padding = 40 / 20 = 2.
        let mut img = RgbaImage::new(40, 40);
        for y in 10..30 {
            for x in 10..30 {
                img.put_pixel(x, y, Rgba([0, 200, 0, 255]));
            }
        }

        let cropped = smart_crop(&img).unwrap();
        assert_eq!(cropped.dimensions(), (24, 24));
        // Padding ring is transparent, content survives.
        assert_eq!(cropped.get_pixel(0, 0)[3], 0);
        assert_eq!(cropped.get_pixel(2, 2)[3], 255);
    }

    #[test]
    fn smart_crop_output_never_larger_than_input() {
        let mut img = RgbaImage::new(20, 20);
        for (_, _, px) in img.enumerate_pixels_mut() {
            *px = Rgba([1, 2, 3, 255]);
        }
        let cropped = smart_crop(&img).unwrap();
        assert_eq!(cropped.dimensions(), (20, 20));
    }

    #[test]
    fn smart_crop_fails_gracefully_on_transparent_input() {
        let img = RgbaImage::new(5, 5);
        match smart_crop(&img) {
            Err(Error::DegenerateImage { width: 5, height: 5 }) => {}
            other => panic!("expected DegenerateImage, got {other:?}"),
        }
    }

    #[test]
    fn smart_crop_fails_gracefully_on_empty_input() {
        let img = RgbaImage::new(0, 0);
        assert!(smart_crop(&img).is_err());
    }
}
