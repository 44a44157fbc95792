//! Browser-backed implementations of the controller seams.

use crate::config::{highlight, storage};
use crate::core::error::StorageError;
use crate::core::{AddressBar, ThemeStore};
use crate::models::Theme;
use crate::utils::dom;
use crate::utils::markdown::highlight_css;

/// History API address bar.
///
/// The root URL `/` is mapped to the current pathname so the site keeps
/// working when served from a subdirectory.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn resolve(url: &str) -> String {
        if url == "/" {
            dom::location_pathname()
        } else {
            url.to_string()
        }
    }
}

impl AddressBar for BrowserHistory {
    fn push(&self, url: &str, path: &str) {
        dom::push_state(&Self::resolve(url), path);
    }

    fn replace(&self, url: &str, path: &str) {
        dom::replace_state(&Self::resolve(url), path);
    }
}

/// Theme preference in localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        dom::local_storage()?
            .get_item(storage::THEME_KEY)
            .ok()??
            .parse()
            .ok()
    }

    fn save(&self, theme: Theme) -> Result<(), StorageError> {
        dom::local_storage()
            .ok_or(StorageError::StorageUnavailable)?
            .set_item(storage::THEME_KEY, theme.as_str())
            .map_err(|_| StorageError::SaveFailed)
    }
}

/// Apply a theme to the document: `data-theme` on `<html>` plus the matching
/// code highlight stylesheet.
pub fn apply_theme(theme: Theme) {
    dom::set_root_attribute("data-theme", theme.as_str());
    if let Some(css) = highlight_css(theme) {
        dom::set_style_element(highlight::STYLE_ELEMENT_ID, &css);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::models::PageRoute;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_theme_store_round_trip() {
        let store = LocalThemeStore;
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[wasm_bindgen_test]
    fn test_current_route_decodes_query() {
        let original = dom::location_pathname();
        dom::replace_state("?page=my%20notes/setup", "");
        let route = PageRoute::current();
        dom::replace_state(&original, "");

        assert_eq!(
            route,
            PageRoute::Page {
                slug: "my notes/setup".to_string()
            }
        );
    }

    #[wasm_bindgen_test]
    fn test_apply_theme_updates_document() {
        apply_theme(Theme::Dark);
        let document = dom::document().unwrap();
        let root = document.document_element().unwrap();
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

        let style = document.get_element_by_id(highlight::STYLE_ELEMENT_ID).unwrap();
        assert!(style.text_content().unwrap_or_default().contains(".hl-"));
    }
}
