//! Shopping List Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_remove_shopping_item, use_ui_store, UiStateStoreFields};

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let (new_item, set_new_item) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = new_item.get();
        if item.trim().is_empty() {
            return;
        }
        ctx.add_to_shopping_list(item);
        set_new_item.set(String::new());
    };

    let remove = move |item: String| {
        spawn_local(async move {
            match commands::remove_shopping_item(&item).await {
                Ok(_) => store_remove_shopping_item(&store, &item),
                Err(e) => ctx.toast(format!("Could not remove item: {}", e)),
            }
        });
    };

    view! {
        <section class="shopping-page">
            <h2 class="page-title">"Shopping List"</h2>
            <form class="shopping-add-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Add item..."
                    prop:value=move || new_item.get()
                    on:input=move |ev| set_new_item.set(event_target_value(&ev))
                />
                <button type="submit" class="flat-btn">"+"</button>
            </form>

            <Show
                when=move || !store.shopping_items().read().is_empty()
                fallback=|| view! { <p class="status-label dim">"Your shopping list is empty."</p> }
            >
                <ul class="shopping-list">
                    <For
                        each=move || store.shopping_items().get()
                        key=|item| item.clone()
                        children=move |item| {
                            let target = item.clone();
                            view! {
                                <li class="shopping-row">
                                    <span>{item}</span>
                                    <button
                                        class="flat-btn destructive"
                                        title="Remove"
                                        on:click=move |_| remove(target.clone())
                                    >
                                        "🗑"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
