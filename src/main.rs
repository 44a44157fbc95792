//! Static Markdown documentation viewer.
//!
//! Discovers the documents under `docs/`, renders a navigation tree and shows
//! one document at a time with client-side history.

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(
        &format!("{} viewer v{}", config::APP_NAME, config::APP_VERSION).into(),
    );

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
