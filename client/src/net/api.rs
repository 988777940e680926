//! Content document fetch.
//!
//! Client-side (csr): a real HTTP GET via `gloo-net`.
//! Native builds (tests): a stub that reports the transport as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto `LoadError` and returned; the caller logs it
//! and leaves the scene without hotspots. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gallery::content::{ContentDocument, LoadError};

#[cfg(any(test, feature = "csr"))]
fn status_error(url: &str, status: u16) -> LoadError {
    LoadError::Network(format!("GET {url}: status {status}"))
}

#[cfg(any(test, feature = "csr"))]
fn transport_error(url: &str, err: impl std::fmt::Display) -> LoadError {
    LoadError::Network(format!("GET {url}: {err}"))
}

/// Fetch and parse the content document at `url`.
///
/// # Errors
///
/// Returns [`LoadError::Network`] if the request fails or answers with a
/// non-success status, and [`LoadError::Parse`] if the body is not a valid
/// content document.
pub async fn fetch_content(url: &str) -> Result<ContentDocument, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;
        if !resp.ok() {
            return Err(status_error(url, resp.status()));
        }
        let body = resp.binary().await.map_err(|e| transport_error(url, e))?;
        ContentDocument::from_slice(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(LoadError::Network(format!("GET {url}: not available outside the browser")))
    }
}
