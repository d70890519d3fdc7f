//! Publishing results to a GitHub repository.
//!
//! Uses the contents API: an existing file's SHA is looked up first (the
//! API requires it for updates), then the PNG is PUT as a base64 payload.
//! On success the raw public URL is returned so the caller can reference
//! the image immediately.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::{Error, Result};

const PUBLISH_TIMEOUT: Duration = Duration::from_secs(30);

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// A GitHub repository to publish into.
#[derive(Debug, Clone)]
pub struct GithubRepo {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Personal access token with contents write permission.
    pub token: String,
}

/// Upload PNG bytes to `dest_path` inside the repository.
///
/// Overwrites an existing file at the same path (its SHA is fetched and
/// attached to the update). Returns the raw public URL of the uploaded
/// file.
///
/// # Errors
///
/// Returns [`Error::Publish`] when the transport fails or the host rejects
/// the write (bad credentials, missing permissions, SHA conflicts).
pub fn upload_png(target: &GithubRepo, dest_path: &str, png_bytes: &[u8]) -> Result<String> {
    let api_url = format!(
        "https://api.github.com/repos/{}/{}/contents/{}",
        target.owner, target.repo, dest_path
    );

    let client = Client::builder()
        .timeout(PUBLISH_TIMEOUT)
        .user_agent(concat!("blobby-logo-generator/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Publish {
            message: e.to_string(),
        })?;

    let mut payload = serde_json::json!({
        "message": format!("Add generated Blobby image: {dest_path}"),
        "content": BASE64.encode(png_bytes),
    });
    if let Some(sha) = existing_sha(&client, &api_url, &target.token) {
        debug!("updating existing file (sha {sha})");
        payload["sha"] = serde_json::Value::String(sha);
    }

    let response = client
        .put(&api_url)
        .header(reqwest::header::AUTHORIZATION, format!("token {}", target.token))
        .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
        .json(&payload)
        .send()
        .map_err(|e| Error::Publish {
            message: e.to_string(),
        })?;

    let status = response.status();
    if status == StatusCode::OK || status == StatusCode::CREATED {
        Ok(raw_url(&target.owner, &target.repo, dest_path))
    } else {
        let body = response.text().unwrap_or_default();
        Err(Error::Publish {
            message: format!("{status}: {body}"),
        })
    }
}

/// SHA of the file currently at `api_url`, if any.
///
/// Lookup failures are treated as "no existing file": the PUT will then
/// either create the file or surface the real conflict.
fn existing_sha(client: &Client, api_url: &str, token: &str) -> Option<String> {
    let response = client
        .get(api_url)
        .header(reqwest::header::AUTHORIZATION, format!("token {token}"))
        .header(reqwest::header::ACCEPT, ACCEPT_HEADER)
        .send()
        .ok()?;

    if !response.status().is_success() {
        return None;
    }

    let body: serde_json::Value = response.json().ok()?;
    body.get("sha")?.as_str().map(str::to_string)
}

fn raw_url(owner: &str, repo: &str, path: &str) -> String {
    format!("https://raw.githubusercontent.com/{owner}/{repo}/main/{path}")
}
