//! Composite company logos onto the Blobby mascot.
//!
//! Takes a company logo in any common raster format, strips its flat
//! background, crops and squares it, and alpha-blends it onto a base
//! illustration of Blobby at a configurable anchor, producing a PNG ready
//! for download or publishing.
//!
//! # Quick Start
//!
//! ```no_run
//! use blobby_logo_generator::{OverlayEngine, ProcessingSettings};
//!
//! let base = image::open("og_blobby.png").unwrap().to_rgba8();
//! let engine = OverlayEngine::new(base);
//!
//! let logo_bytes = std::fs::read("logo.png").unwrap();
//! let result = engine
//!     .generate(&logo_bytes, &ProcessingSettings::default())
//!     .unwrap();
//! result.image.save("blobby_with_logo.png").unwrap();
//! ```
//!
//! # Pipeline
//!
//! Generation runs a fixed chain of pure transforms over an RGBA raster:
//! background classification and removal, content-aware cropping, square
//! normalization, contrast adjustment, edge smoothing, and final
//! alpha-blended placement. Optional stages are gated by
//! [`ProcessingSettings`]; the labels of the stages that actually ran come
//! back in [`PipelineResult::steps`]. Degenerate inputs (empty images,
//! fully transparent content) fall back to pass-through instead of
//! failing, so the pipeline only errors at its I/O boundary.
//!
//! The background heuristic is purely colorimetric: the most frequent
//! corner color is assumed to be a flat background. It is best-effort, not
//! content-aware segmentation.

#![deny(missing_docs)]

pub mod background;
pub mod compose;
pub mod crop;
mod engine;
pub mod enhance;
pub mod error;
#[cfg(feature = "remote")]
pub mod fetch;
pub mod normalize;
#[cfg(feature = "remote")]
pub mod publish;

pub use engine::{encode_png, OverlayEngine, PipelineResult, ProcessingSettings};
pub use error::{Error, Result};
