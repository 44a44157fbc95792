//! Page layout.
//!
//! Header on top, navigation sidebar on the left, breadcrumb and document on
//! the right. Owns the window-level listeners: history, keyboard shortcuts and
//! scroll tracking.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::content::Content;
use crate::components::header::Header;
use crate::components::icons as ic;
use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastHost;
use crate::config::ui;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/layout.module.css");

// ============================================================================
// Window Listeners
// ============================================================================

/// Attach a listener to `window` for the lifetime of the app.
#[cfg(target_arch = "wasm32")]
fn listen_window<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(window) = dom::window() {
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Back/forward buttons re-resolve the document without pushing history.
fn setup_history_listener(_ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    listen_window("popstate", move |ev: web_sys::PopStateEvent| {
        _ctx.pop_state(ev.state().as_string());
    });
}

/// Ctrl/Cmd+K focuses the search box (opening the drawer on mobile).
fn setup_shortcuts(_ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    listen_window("keydown", move |ev: web_sys::KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            _ctx.sidebar_open.set(true);
            dom::focus_element(&format!("#{}", ui::SEARCH_INPUT_ID));
        }
    });
}

fn setup_scroll_tracking(_show_top: RwSignal<bool>) {
    #[cfg(target_arch = "wasm32")]
    listen_window("scroll", move |_: web_sys::Event| {
        _show_top.set(dom::scroll_y() > ui::BACK_TO_TOP_THRESHOLD_PX);
    });
}

// ============================================================================
// Layout Component
// ============================================================================

#[component]
pub fn DocsLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_mobile = use_media_query(ui::mobile_media_query());
    let show_top = RwSignal::new(false);

    setup_history_listener(ctx);
    setup_shortcuts(ctx);
    setup_scroll_tracking(show_top);

    // Drawer state is meaningless on wide screens
    Effect::new(move || {
        if !is_mobile.get() {
            ctx.sidebar_open.set(false);
        }
    });

    view! {
        <div class=css::layout>
            <Header is_mobile=is_mobile />

            <div class=css::body>
                <Sidebar is_mobile=is_mobile />

                // Click outside the drawer closes it
                <Show when=move || is_mobile.get() && ctx.sidebar_open.get()>
                    <div class=css::backdrop on:click=move |_| ctx.sidebar_open.set(false)></div>
                </Show>

                <main class=css::main>
                    <Breadcrumb />
                    <Content />
                </main>
            </div>

            <Show when=move || show_top.get()>
                <button
                    class=css::backToTop
                    title="Back to top"
                    aria-label="Back to top"
                    on:click=move |_| dom::scroll_to_top(true)
                >
                    <Icon icon=ic::ARROW_UP />
                </button>
            </Show>

            <ToastHost />
        </div>
    }
}
