//! Core logic for the documentation viewer.
//!
//! This module provides:
//! - [`tree`] building the navigation tree from known document paths
//! - [`discover`] finding those paths via a manifest or probing
//! - [`search`] and [`navigation`] for the sidebar list
//! - [`PageController`] driving the page state machine

pub mod breadcrumb;
pub mod controller;
pub mod discovery;
pub mod error;
pub mod navigation;
pub mod search;
pub mod tree;

pub use controller::{AddressBar, DocView, NavigationRequest, PageController, ThemeStore};
pub use discovery::{DocumentSource, discover};
