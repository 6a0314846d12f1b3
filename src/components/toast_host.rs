//! Toast Host Component
//!
//! Overlay stacking the active toasts; each removes itself after a timeout.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <span>{toast.message}</span>
                            <button
                                class="flat-btn"
                                on:click=move |_| ctx.toasts.update(|t| t.retain(|x| x.id != id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
