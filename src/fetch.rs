//! Remote logo fetch.
//!
//! The only blocking I/O on the input side of the pipeline. Requests carry
//! a browser-style User-Agent (several logo CDNs reject unknown clients)
//! and a bounded timeout so a slow host fails fast instead of hanging a
//! generation request.

use std::time::Duration;

use log::debug;

use crate::error::{Error, Result};

/// Bounded wait for the whole request, connect included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Download raw image bytes from `url`.
///
/// # Errors
///
/// Returns [`Error::Fetch`] on transport failures, timeouts, and
/// non-success HTTP statuses. Decoding is left to the caller so format
/// errors stay distinguishable from network errors.
pub fn fetch_image(url: &str) -> Result<Vec<u8>> {
    let fetch_err = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(BROWSER_USER_AGENT)
        .build()
        .map_err(fetch_err)?;

    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(fetch_err)?;

    let bytes = response.bytes().map_err(fetch_err)?;
    debug!("fetched {} bytes from {url}", bytes.len());
    Ok(bytes.to_vec())
}
