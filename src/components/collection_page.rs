//! Collection Page Component
//!
//! Custom recipes and saved favorites in three filtered sections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{RecipeRow, RowMode};
use crate::commands;
use crate::context::use_app_context;
use crate::models::{CollectionView, RecipeCard};
use crate::navigation::Tab;
use crate::request_slot::RequestSlot;

#[component]
pub fn CollectionPage() -> impl IntoView {
    let ctx = use_app_context();
    let filter = RwSignal::new(String::new());
    let collection = RwSignal::new(CollectionView::default());
    let slot = StoredValue::new(RequestSlot::new());

    // Reload on data changes and whenever the tab is shown
    Effect::new(move |_| {
        let _ = ctx.collection_version.get();
        let text = filter.get();
        if ctx.active_tab.get() != Tab::Collection {
            return;
        }
        let ticket = slot.with_value(|s| s.issue());
        spawn_local(async move {
            let result = commands::list_collection(&text).await;
            slot.with_value(|s| {
                s.apply_if_current(ticket, || match result {
                    Ok(loaded) => collection.set(loaded),
                    Err(e) => ctx.toast(format!("Could not load collection: {}", e)),
                })
            });
        });
    });

    let empty_label = move || {
        if filter.with(|f| f.trim().is_empty()) {
            "Collection is empty."
        } else {
            "No items found."
        }
    };

    view! {
        <section class="collection-page">
            <input
                type="search"
                class="search-input"
                placeholder="Filter collection..."
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />

            <Show
                when=move || !collection.with(CollectionView::is_empty)
                fallback=move || view! { <p class="status-label dim">{empty_label}</p> }
            >
                <CollectionSection
                    title="My Creations"
                    cards=Signal::derive(move || collection.with(|c| c.custom.clone()))
                />
                <CollectionSection
                    title="Saved Cocktails"
                    cards=Signal::derive(move || collection.with(|c| c.cocktails.clone()))
                />
                <CollectionSection
                    title="Saved Recipes"
                    cards=Signal::derive(move || collection.with(|c| c.meals.clone()))
                />
            </Show>
        </section>
    }
}

/// One titled group, hidden when it has no rows
#[component]
fn CollectionSection(title: &'static str, cards: Signal<Vec<RecipeCard>>) -> impl IntoView {
    view! {
        <Show when=move || cards.with(|c| !c.is_empty())>
            <h3 class="section-title">{title}</h3>
            <div class="recipe-list">
                <For
                    each=move || cards.get()
                    key=|card| card.key()
                    children=move |card| view! { <RecipeRow card=card mode=RowMode::Collection /> }
                />
            </div>
        </Show>
    }
}
