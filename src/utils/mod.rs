//! Browser and rendering utilities.
//!
//! Provides:
//! - [`HttpSource`] - Document fetching over the Fetch API
//! - [`render_markdown`] - Markdown rendering with highlighting and XSS
//!   sanitization
//! - [`BrowserHistory`], [`LocalThemeStore`] - History API and localStorage
//!   backends for the page controller

pub mod browser;
pub mod dom;
mod fetch;
pub mod format;
pub mod markdown;

pub use browser::{BrowserHistory, LocalThemeStore, apply_theme};
pub use fetch::HttpSource;
pub use markdown::render_markdown;
