// SPDX-License-Identifier: MPL-2.0
//! Retrieval of pages and images from local files or HTTP(S).
//!
//! Everything here is async and meant to run inside an Iced `Task` on the
//! tokio runtime. Decoding is pushed to the blocking pool.

use crate::error::{Error, Result};
use crate::media::image::{decode_image, ImageData};
use reqwest::Url;
use std::path::Path;

/// A fetched HTML page and the URL relative links resolve against.
#[derive(Debug, Clone)]
pub struct Document {
    pub base: Url,
    pub html: String,
}

/// Turns a command-line argument into a URL.
///
/// `http`, `https` and `file` URLs are used as given; anything else is a
/// filesystem path, made absolute against the working directory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the working directory cannot be read and
/// [`Error::Fetch`] if the path cannot be expressed as a URL.
pub fn resolve_location(location: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(location) {
        if matches!(url.scheme(), "http" | "https" | "file") {
            return Ok(url);
        }
    }

    let absolute = std::path::absolute(Path::new(location))?;
    Url::from_file_path(&absolute)
        .map_err(|()| Error::Fetch(format!("not a usable path: {}", absolute.display())))
}

/// Reads the raw bytes behind `url`.
///
/// # Errors
///
/// Returns [`Error::Fetch`] for network failures, non-success HTTP status or
/// unsupported schemes, and [`Error::Io`] for unreadable local files.
pub async fn fetch_bytes(client: &reqwest::Client, url: &Url) -> Result<Vec<u8>> {
    match url.scheme() {
        "http" | "https" => {
            let response = client.get(url.clone()).send().await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| Error::Fetch(format!("not a local path: {url}")))?;
            Ok(tokio::fs::read(path).await?)
        }
        other => Err(Error::Fetch(format!("unsupported scheme `{other}`"))),
    }
}

/// Fetches and decodes the image at `url`.
pub async fn load_image(client: reqwest::Client, url: String) -> Result<ImageData> {
    let parsed = Url::parse(&url).map_err(|e| Error::Fetch(format!("{url}: {e}")))?;
    let bytes = fetch_bytes(&client, &parsed).await?;

    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .unwrap_or_else(|e| Err(Error::Decode(format!("decode task failed: {e}"))))
}

/// Fetches the HTML page named on the command line.
pub async fn load_document(client: reqwest::Client, location: String) -> Result<Document> {
    let base = resolve_location(&location)?;
    let bytes = fetch_bytes(&client, &base).await?;
    let html = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(url = %base, bytes = bytes.len(), "page fetched");
    Ok(Document { base, html })
}
