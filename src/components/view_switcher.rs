//! View Switcher Component
//!
//! Tab bar for switching between the four main pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::navigation::Tab;

#[component]
pub fn ViewSwitcher() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="view-switcher">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || ctx.active_tab.get() == tab;
                    view! {
                        <button
                            class="view-tab"
                            class:active=is_active
                            title=tab.label()
                            on:click=move |_| ctx.active_tab.set(tab)
                        >
                            <span class="view-tab-icon">{tab.icon()}</span>
                            <span class="view-tab-label">{tab.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
