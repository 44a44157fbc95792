//! UI components built with Leptos.
//!
//! - [`DocsLayout`] - Page layout and window-level listeners
//! - [`header`] - Title bar with copy-link, About and theme buttons
//! - [`sidebar`] - Search box and navigation tree
//! - [`breadcrumb`] - Path of the displayed document
//! - [`content`] - Rendered document, table of contents, error and About views
//! - [`toast`] - Transient notices
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod breadcrumb;
pub mod content;
pub mod header;
pub mod icons;
pub mod layout;
pub mod sidebar;
pub mod toast;

pub use layout::DocsLayout;
