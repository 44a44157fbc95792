//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`PageRoute`] - Query-based deep links (`?page=guide/setup`)
//! - [`Theme`] - Light/dark page theme
//! - [`TreeView`], [`ContentView`], [`Crumb`] - View models handed to components

pub mod route;
mod theme;
mod view;

pub use route::PageRoute;
pub use theme::Theme;
pub use view::{
    ContentView, Crumb, ErrorAction, ErrorView, NavRow, RenderedPage, TocEntry, Toast, TreeView,
};
