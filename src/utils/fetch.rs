//! Network fetching utilities.
//!
//! Documents are plain static files, so a GET with a success status is all
//! that is needed. No timeout is applied: a hanging request only keeps the
//! loading indicator visible.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::core::DocumentSource;
use crate::core::error::FetchError;

/// [`DocumentSource`] backed by the browser Fetch API.
///
/// Paths are resolved relative to the page URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        fetch_content(path).await
    }
}

/// Fetch text from a URL using the Fetch API.
///
/// Any non-2xx status is reported as [`FetchError::HttpError`].
pub async fn fetch_content(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "request failed".to_string()))
        })?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
