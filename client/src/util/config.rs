//! Client configuration read from the page URL.
//!
//! The showroom loads its content document from `/api/content` unless the page
//! was opened with a `?content=<url>` query parameter, which lets one build
//! serve several showrooms from static hosting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint served by the showroom server.
pub const DEFAULT_CONTENT_URL: &str = "/api/content";

/// Query parameter that overrides the content document location.
pub const CONTENT_PARAM: &str = "content";

/// Pick the content URL from an optional query parameter value.
pub fn resolve_content_url(param: Option<String>) -> String {
    param
        .map(|raw| raw.trim().to_owned())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTENT_URL.to_owned())
}

/// The content URL for the current page.
pub fn content_url() -> String {
    #[cfg(feature = "csr")]
    {
        let param = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get(CONTENT_PARAM));
        resolve_content_url(param)
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve_content_url(None)
    }
}
