//! Query-based routing for document deep links.
//!
//! URL format:
//! - `/` → the root document (`docs/README.md`)
//! - `?page=guide/installation` → `docs/guide/installation.md`
//!
//! Only the lowercase `.md` extension marks a document.

use crate::config::{DOC_ROOT, MARKDOWN_EXT, PAGE_QUERY_KEY, README_NAME, ROOT_DOCUMENT};
use crate::utils::dom;

/// Document addressed by the address bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageRoute {
    /// Root document, bare site URL.
    Root,
    /// Any other document.
    Page {
        /// Path relative to the document root, extension stripped
        /// (e.g. "guide/installation").
        slug: String,
    },
}

impl PageRoute {
    /// Route for a document path.
    ///
    /// Accepts paths relative to the document root (`guide/setup.md`) as well as
    /// fetch paths (`docs/guide/setup.md`); the extension is optional.
    pub fn from_document(path: &str) -> Self {
        Self::from_slug(&strip_extension(&relative_to_root(path)))
    }

    /// Route for the decoded value of the `page` query parameter.
    ///
    /// A missing or empty parameter means root.
    pub fn from_param(page: Option<&str>) -> Self {
        match page.filter(|p| !p.is_empty()) {
            Some(page) => Self::from_document(page),
            None => Self::Root,
        }
    }

    fn from_slug(slug: &str) -> Self {
        let slug = slug.trim_matches('/');
        if slug.is_empty() || slug == README_NAME {
            Self::Root
        } else {
            Self::Page {
                slug: slug.to_string(),
            }
        }
    }

    /// Address bar URL for this route.
    pub fn to_url(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Page { slug } => format!("?{}={}", PAGE_QUERY_KEY, slug),
        }
    }

    /// Document path relative to the document root (with extension).
    pub fn document_path(&self) -> String {
        match self {
            Self::Root => ROOT_DOCUMENT.to_string(),
            Self::Page { slug } => format!("{}.{}", slug, MARKDOWN_EXT),
        }
    }

    /// Get the current route from the browser URL.
    ///
    /// Uses `URLSearchParams` so percent-encoded values are decoded.
    pub fn current() -> Self {
        let page = web_sys::UrlSearchParams::new_with_str(&dom::location_search())
            .ok()
            .and_then(|params| params.get(PAGE_QUERY_KEY));

        Self::from_param(page.as_deref())
    }
}

/// Fetch path (`docs/<path>`) for a path relative to the document root.
pub fn fetch_path(document_path: &str) -> String {
    format!("{}/{}", DOC_ROOT, relative_to_root(document_path))
}

/// Strip a leading `/` and the document-root prefix.
pub fn relative_to_root(path: &str) -> String {
    let path = path.trim_start_matches('/');
    path.strip_prefix(DOC_ROOT)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
        .to_string()
}

/// Strip the Markdown extension, if present.
pub fn strip_extension(path: &str) -> String {
    path.strip_suffix(MARKDOWN_EXT)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(path)
        .to_string()
}

/// Resolve a link found inside a rendered document to a document path.
///
/// Only links to Markdown files resolve; external URLs, bare anchors and other
/// resources yield `None`. Relative links resolve against the folder of
/// `current`, and any `?query` or `#fragment` is dropped.
pub fn resolve_link(current: &str, href: &str) -> Option<String> {
    if href.contains(':') || href.starts_with("//") || href.starts_with('#') {
        return None;
    }
    let target = href.split(['#', '?']).next().unwrap_or_default();
    if !target.ends_with(&format!(".{}", MARKDOWN_EXT)) {
        return None;
    }

    let (mut segments, target) = match target.strip_prefix('/') {
        Some(absolute) => (Vec::new(), relative_to_root(absolute)),
        None => {
            let current = relative_to_root(current);
            let folder: Vec<String> = match current.rsplit_once('/') {
                Some((dir, _)) => dir.split('/').map(String::from).collect(),
                None => Vec::new(),
            };
            (folder, target.to_string())
        }
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s.to_string()),
        }
    }

    (!segments.is_empty()).then(|| segments.join("/"))
}
