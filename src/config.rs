//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site title shown in the header.
pub const APP_NAME: &str = "Docs";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Breadcrumb label of the built-in About page.
pub const ABOUT_TITLE: &str = "About";

// =============================================================================
// Document Layout
// =============================================================================

/// Directory (relative to the site root) holding every Markdown document.
pub const DOC_ROOT: &str = "docs";

/// Document shown for the bare site URL (relative to [`DOC_ROOT`]).
pub const ROOT_DOCUMENT: &str = "README.md";

/// Extension recognized as a Markdown document (without the dot).
pub const MARKDOWN_EXT: &str = "md";

/// Segment name of a folder's index page (without extension).
pub const INDEX_NAME: &str = "index";

/// Segment name of a readme page (without extension).
pub const README_NAME: &str = "README";

/// Query parameter carrying the current document in the address bar.
pub const PAGE_QUERY_KEY: &str = "page";

// =============================================================================
// Discovery
// =============================================================================

/// Optional manifest listing every document (relative to [`DOC_ROOT`]).
///
/// Accepted shapes: `["README.md", "guide/index.md"]` or
/// `{ "documents": ["README.md", "guide/index.md"] }`.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Documents probed when no manifest is available (relative to [`DOC_ROOT`]).
pub const PROBE_PATHS: &[&str] = &["README.md", "index.md", "guide/index.md"];

/// Placeholder entries padded into probe-discovered trees.
pub mod placeholders {
    /// Top-level folders added when absent.
    pub const FOLDERS: &[&str] = &["guide", "tutorial", "api", "reference", "faq", "examples"];

    /// Folder receiving [`GUIDE_FILES`].
    pub const GUIDE_FOLDER: &str = "guide";

    /// Files added to the guide folder when absent.
    pub const GUIDE_FILES: &[&str] = &["getting-started", "installation", "configuration", "usage"];
}

// =============================================================================
// Persistence
// =============================================================================

/// localStorage keys.
pub mod storage {
    /// Theme preference (`light` | `dark`).
    pub const THEME_KEY: &str = "theme";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Layout and interaction constants.
pub mod ui {
    /// Viewport width (px) at or below which the sidebar behaves as a drawer.
    pub const MOBILE_BREAKPOINT_PX: u32 = 768;

    /// Scroll offset (px) after which the back-to-top button is shown.
    pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

    /// Folders at this depth or shallower start expanded.
    pub const DEFAULT_EXPANDED_DEPTH: usize = 0;

    /// Id of the sidebar search input (focused by Ctrl/Cmd+K).
    pub const SEARCH_INPUT_ID: &str = "doc-search";

    /// How long a toast stays on screen (ms).
    pub const TOAST_DURATION_MS: i32 = 3000;

    /// Heading levels listed in the "On this page" panel.
    pub const TOC_LEVELS: std::ops::RangeInclusive<u8> = 2..=3;

    /// Media query matching the mobile layout.
    pub fn mobile_media_query() -> String {
        format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX)
    }
}

/// Code block highlighting.
pub mod highlight {
    /// syntect theme used with the light page theme.
    pub const LIGHT_THEME: &str = "InspiredGitHub";

    /// syntect theme used with the dark page theme.
    pub const DARK_THEME: &str = "base16-ocean.dark";

    /// Prefix of every class emitted by the highlighter.
    pub const CLASS_PREFIX: &str = "hl-";

    /// Id of the `<style>` element holding the active highlight stylesheet.
    pub const STYLE_ELEMENT_ID: &str = "highlight-theme";
}

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
