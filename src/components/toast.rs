//! Transient notice pinned to the bottom of the screen.

use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        ctx.toast.get().map(|toast| {
            view! {
                <div class=css::toast role="status" aria-live="polite">
                    {toast.message}
                </div>
            }
        })
    }
}
