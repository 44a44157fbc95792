//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper is a no-op
//! (or returns a neutral value) when the API is unavailable.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Remove focus from whatever element holds it.
pub fn blur_active_element() {
    if let Some(document) = document()
        && let Some(element) = document.active_element()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = html_element.blur();
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// Vertical scroll offset of the page in pixels.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Scroll the page to the top.
pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Scroll the element with the given id into view.
pub fn scroll_to_anchor(id: &str) -> bool {
    match document().and_then(|d| d.get_element_by_id(id)) {
        Some(element) => {
            element.scroll_into_view();
            true
        }
        None => false,
    }
}

// =============================================================================
// Document Styling
// =============================================================================

/// Set an attribute on the `<html>` element.
pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(name, value);
    }
}

/// Replace the text of a `<style>` element in `<head>`, creating it on first
/// use.
pub fn set_style_element(id: &str, css: &str) {
    let Some(document) = document() else {
        return;
    };

    let element = match document.get_element_by_id(id) {
        Some(element) => element,
        None => {
            let Ok(element) = document.create_element("style") else {
                return;
            };
            element.set_id(id);
            if let Some(head) = document.head() {
                let _ = head.append_child(&element);
            }
            element
        }
    };
    element.set_text_content(Some(css));
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.search` (including the leading `?`, or empty).
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Full address bar URL.
pub fn location_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Current `location.pathname`.
pub fn location_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Add a history entry carrying `state` without reloading.
pub fn push_state(url: &str, state: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::from_str(state), "", Some(url));
    }
}

/// Overwrite the current history entry without reloading.
pub fn replace_state(url: &str, state: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::from_str(state), "", Some(url));
    }
}

/// Reload the whole page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

// =============================================================================
// Async Helpers
// =============================================================================

/// Resolve after `ms` milliseconds.
pub async fn delay(ms: i32) {
    let Some(window) = window() else {
        return;
    };
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = JsFuture::from(promise).await;
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("Window not available"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
