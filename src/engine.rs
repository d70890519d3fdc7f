//! Core generation engine.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::error::{Error, Result};
use crate::{background, compose, crop, enhance, normalize};

/// Settings controlling one generation request.
///
/// Created once per request and never mutated mid-pipeline; each stage
/// receives only the fields it needs. The defaults are the conservative
/// values tuned to preserve the original logo: gentle background removal,
/// no contrast change, no edge blur, high-quality 600px working canvas,
/// and a 100x100 placement centered on Blobby's hat.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSettings {
    /// Manhattan-distance cutoff for background transparency. 0 disables
    /// background removal entirely.
    pub bg_tolerance: u32,
    /// Linear contrast multiplier; exactly 1.0 skips the stage.
    pub contrast_factor: f32,
    /// Enable content-aware cropping.
    pub smart_crop: bool,
    /// Enable the subtle alpha-channel edge blur.
    pub edge_smoothing: bool,
    /// Square working-canvas size for normalization. 600 favors quality,
    /// 300 favors speed and memory.
    pub canvas_size: u32,
    /// Horizontal center of the logo on the base image, in pixels.
    pub anchor_x: i32,
    /// Vertical center of the logo on the base image, in pixels.
    pub anchor_y: i32,
    /// Final composited logo width in pixels.
    pub logo_width: u32,
    /// Final composited logo height in pixels.
    pub logo_height: u32,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            bg_tolerance: 25,
            contrast_factor: 1.0,
            smart_crop: true,
            edge_smoothing: false,
            canvas_size: 600,
            anchor_x: 550,
            anchor_y: 175,
            logo_width: 100,
            logo_height: 100,
        }
    }
}

/// Result of one generation request, owned by the caller.
#[derive(Debug)]
pub struct PipelineResult {
    /// The base illustration with the logo composited on.
    pub image: RgbaImage,
    /// The preprocessed logo before final placement, for previews.
    pub processed_logo: RgbaImage,
    /// Dimensions of the logo as decoded, before any processing.
    pub original_dimensions: (u32, u32),
    /// Whether the decoded logo already carried an alpha channel.
    pub had_transparency: bool,
    /// Labels of the processing steps applied, in order. Skipped optional
    /// stages and silent fallbacks are recorded here too.
    pub steps: Vec<String>,
    /// The settings this result was generated with.
    pub settings: ProcessingSettings,
}

/// The generation engine holding the decoded base illustration.
///
/// Create once with [`OverlayEngine::new`] (or [`OverlayEngine::from_path`])
/// and reuse for any number of requests; [`OverlayEngine::generate`] never
/// mutates the base, so results are independent of each other.
pub struct OverlayEngine {
    base: RgbaImage,
}

impl OverlayEngine {
    /// Create an engine from an already-decoded base illustration.
    #[must_use]
    pub fn new(base: RgbaImage) -> Self {
        Self { base }
    }

    /// Create an engine by decoding base-image bytes (any common format).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the bytes are not a decodable image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let base = image::load_from_memory(bytes)
            .map_err(Error::Decode)?
            .to_rgba8();
        Ok(Self::new(base))
    }

    /// Create an engine by loading the base illustration from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the file cannot be read or decoded.
    pub fn from_path(path: &Path) -> Result<Self> {
        let base = image::open(path).map_err(Error::Decode)?.to_rgba8();
        Ok(Self::new(base))
    }

    /// The base illustration this engine composites onto.
    #[must_use]
    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    /// Run the full pipeline: decode the logo, preprocess it, and composite
    /// it onto a copy of the base illustration.
    ///
    /// The preprocessing chain is background removal, optional smart crop,
    /// square normalization, optional contrast adjustment, and optional
    /// edge smoothing; every stage is a pure transform and degenerate
    /// inputs fall back to pass-through rather than failing. The applied
    /// step labels are returned in [`PipelineResult::steps`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `logo_bytes` is not a decodable image.
    /// The transform chain itself never fails.
    pub fn generate(
        &self,
        logo_bytes: &[u8],
        settings: &ProcessingSettings,
    ) -> Result<PipelineResult> {
        let decoded = image::load_from_memory(logo_bytes).map_err(Error::Decode)?;
        let had_transparency = decoded.color().has_alpha();
        let logo = decoded.to_rgba8();
        let original_dimensions = logo.dimensions();
        debug!(
            "processing {}x{} logo (alpha: {had_transparency})",
            original_dimensions.0, original_dimensions.1
        );

        let (processed, mut steps) = process_logo(logo, settings);

        let image = compose::overlay_logo(
            &self.base,
            &processed,
            settings.logo_width,
            settings.logo_height,
            settings.anchor_x,
            settings.anchor_y,
        );
        steps.push("Final resize and placement".to_string());

        Ok(PipelineResult {
            image,
            processed_logo: processed,
            original_dimensions,
            had_transparency,
            steps,
            settings: settings.clone(),
        })
    }
}

/// The preprocessing chain shared by generation and preview.
fn process_logo(mut logo: RgbaImage, settings: &ProcessingSettings) -> (RgbaImage, Vec<String>) {
    let mut steps = Vec::new();

    if let Some(bg) = background::dominant_corner_color(&logo) {
        debug!("background classified as {:?}", bg.0);
        background::remove_background(&mut logo, bg, settings.bg_tolerance);
        steps.push("Gentle background removal".to_string());
    }

    if settings.smart_crop {
        match crop::smart_crop(&logo) {
            Ok(cropped) => {
                logo = cropped;
                steps.push("Smart cropping".to_string());
            }
            Err(err) => {
                debug!("smart crop skipped: {err}");
                steps.push("Smart cropping skipped (no opaque content)".to_string());
            }
        }
    }

    logo = normalize::square_with_padding(&logo, settings.canvas_size);
    steps.push("Square padding".to_string());

    if (settings.contrast_factor - 1.0).abs() < f32::EPSILON {
        steps.push("Original contrast preserved".to_string());
    } else {
        enhance::adjust_contrast(&mut logo, settings.contrast_factor);
        steps.push("Minimal contrast adjustment".to_string());
    }

    if settings.edge_smoothing {
        enhance::smooth_edges(&mut logo);
        steps.push("Edge smoothing".to_string());
    } else {
        steps.push("Original sharpness preserved".to_string());
    }

    (logo, steps)
}

/// Encode an RGBA image to PNG bytes.
///
/// This is the byte boundary of the pipeline: results leave as PNG for
/// download or publishing.
///
/// # Errors
///
/// Returns [`Error::Encode`] if PNG serialization fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(Error::Encode)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn default_settings_match_conservative_profile() {
        let settings = ProcessingSettings::default();
        assert_eq!(settings.bg_tolerance, 25);
        assert!((settings.contrast_factor - 1.0).abs() < f32::EPSILON);
        assert!(settings.smart_crop);
        assert!(!settings.edge_smoothing);
        assert_eq!(settings.canvas_size, 600);
        assert_eq!((settings.anchor_x, settings.anchor_y), (550, 175));
        assert_eq!((settings.logo_width, settings.logo_height), (100, 100));
    }

    #[test]
    fn generate_rejects_undecodable_bytes() {
        let engine = OverlayEngine::new(RgbaImage::new(10, 10));
        let err = engine
            .generate(b"definitely not an image", &ProcessingSettings::default())
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn process_logo_records_every_stage() {
        let mut logo = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255]));
        for y in 4..12 {
            for x in 4..12 {
                logo.put_pixel(x, y, Rgba([200, 0, 0, 255]));
            }
        }
        let settings = ProcessingSettings {
            canvas_size: 32,
            edge_smoothing: true,
            contrast_factor: 1.2,
            ..ProcessingSettings::default()
        };

        let (processed, steps) = process_logo(logo, &settings);

        assert_eq!(processed.dimensions(), (32, 32));
        assert_eq!(
            steps,
            vec![
                "Gentle background removal",
                "Smart cropping",
                "Square padding",
                "Minimal contrast adjustment",
                "Edge smoothing",
            ]
        );
    }

    #[test]
    fn process_logo_falls_back_when_crop_finds_nothing() {
        // A uniform logo is classified entirely as background.
        let logo = RgbaImage::from_pixel(8, 8, Rgba([240, 240, 240, 255]));
        let settings = ProcessingSettings {
            canvas_size: 16,
            ..ProcessingSettings::default()
        };

        let (processed, steps) = process_logo(logo, &settings);

        assert_eq!(processed.dimensions(), (16, 16));
        assert!(steps
            .iter()
            .any(|s| s == "Smart cropping skipped (no opaque content)"));
    }

    #[test]
    fn encode_png_round_trips() {
        let img = RgbaImage::from_pixel(6, 4, Rgba([12, 34, 56, 200]));
        let png = encode_png(&img).unwrap();
        let back = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(back, img);
    }
}
