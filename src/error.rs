//! Error types for the blobby-logo-generator crate.

/// Errors that can occur while generating a composited Blobby image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The logo or base image bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    /// The result image could not be encoded to PNG.
    #[error("failed to encode PNG: {0}")]
    Encode(image::ImageError),

    /// The image has no opaque content where a crop was requested.
    ///
    /// Recoverable: the pipeline skips the crop stage and records the
    /// fallback in the processing-steps log instead of failing.
    #[error("no opaque content to crop in {width}x{height} image")]
    DegenerateImage {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote logo could not be fetched (network failure, timeout,
    /// or non-success HTTP status).
    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// The underlying transport or status error.
        #[source]
        source: reqwest::Error,
    },

    /// The remote content host rejected the upload.
    #[cfg(feature = "remote")]
    #[error("publish failed: {message}")]
    Publish {
        /// Human-readable failure description from the host or transport.
        message: String,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
