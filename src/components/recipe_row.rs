//! Recipe Row Component
//!
//! Expandable list row: thumbnail, title and subtitle, with the recipe's
//! ingredients and instructions revealed on click. Summary rows fetch their
//! full record on first expansion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DeleteConfirmButton, IngredientList, RecipeThumb};
use crate::commands;
use crate::context::use_app_context;
use crate::models::{ExternalKind, FavoriteState, Recipe, RecipeCard, RecipeView};
use crate::request_slot::RequestSlot;
use crate::store::{store_is_favorited, store_set_favorited, use_ui_store};

/// Where the row is shown, which decides its actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    /// Search results: star toggle
    Search,
    /// Collection: export plus delete/unsave
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[component]
pub fn RecipeRow(card: RecipeCard, mode: RowMode) -> impl IntoView {
    let id = card.id.clone();
    let kind = card.source.external();
    let shown = RwSignal::new(card.view.clone());
    let recipe = RwSignal::new(card.recipe.clone());
    let expanded = RwSignal::new(false);
    let details = RwSignal::new(if card.view.has_details {
        DetailState::Loaded
    } else {
        DetailState::Idle
    });
    let slot = StoredValue::new(RequestSlot::new());

    let load_details = {
        let id = id.clone();
        move || {
            let Some(kind) = kind else { return };
            if details.get_untracked() != DetailState::Idle {
                return;
            }
            details.set(DetailState::Loading);
            let ticket = slot.with_value(|s| s.issue());
            let id = id.clone();
            spawn_local(async move {
                let result = commands::lookup_recipe(kind, &id).await;
                slot.with_value(|s| {
                    s.apply_if_current(ticket, || match result {
                        Ok(Some(full)) => {
                            shown.set(full.view);
                            recipe.set(full.recipe);
                            details.set(DetailState::Loaded);
                        }
                        Ok(None) | Err(_) => details.set(DetailState::Failed),
                    })
                });
            });
        }
    };

    let toggle_expanded = move |_| {
        let open = !expanded.get_untracked();
        expanded.set(open);
        if open {
            load_details();
        }
    };

    view! {
        <div class="recipe-row" class:expanded=move || expanded.get()>
            <div class="recipe-row-header" on:click=toggle_expanded>
                {move || shown.with(|v| view! { <RecipeThumb image=v.image.clone() /> })}
                <div class="recipe-row-text">
                    <span class="recipe-title">{move || shown.with(|v| v.title.clone())}</span>
                    <span class="recipe-subtitle dim">{move || shown.with(RecipeView::subtitle)}</span>
                </div>
                {match (mode, kind) {
                    (RowMode::Search, Some(kind)) => {
                        view! { <FavoriteStar kind=kind id=id.clone() recipe=recipe /> }.into_any()
                    }
                    _ => ().into_any(),
                }}
                <span class="expander-arrow">{move || if expanded.get() { "▾" } else { "▸" }}</span>
            </div>

            <Show when=move || expanded.get()>
                <div class="recipe-details">
                    {move || match details.get() {
                        DetailState::Idle | DetailState::Loading => {
                            view! { <p class="dim">"Loading..."</p> }.into_any()
                        }
                        DetailState::Failed => {
                            view! { <p class="error-text">"Failed to load details."</p> }.into_any()
                        }
                        DetailState::Loaded => {
                            let v = shown.get();
                            view! {
                                <h4>"Ingredients"</h4>
                                <IngredientList ingredients=v.ingredients />
                                <h4>"Instructions"</h4>
                                <p class="instructions">
                                    {v.instructions.unwrap_or_else(|| "No instructions.".to_string())}
                                </p>
                            }
                            .into_any()
                        }
                    }}
                    {(mode == RowMode::Collection).then(|| {
                        view! { <CollectionActions id=id.clone() kind=kind recipe=recipe /> }
                    })}
                </div>
            </Show>
        </div>
    }
}

/// Star toggling the record's membership in the favorites file
#[component]
fn FavoriteStar(kind: ExternalKind, id: String, recipe: RwSignal<Recipe>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let favorited = {
        let id = id.clone();
        move || store_is_favorited(&store, kind, &id)
    };

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Recipe::External { record, .. } = recipe.get_untracked() else {
            return;
        };
        let id = id.clone();
        spawn_local(async move {
            match commands::toggle_favorite(kind, &id, &record).await {
                Ok(state) => {
                    let saved = state == FavoriteState::Favorited;
                    store_set_favorited(&store, kind, &id, saved);
                    ctx.toast(if saved { "Saved" } else { "Removed" });
                    ctx.reload_collection();
                }
                Err(e) => ctx.toast(format!("Could not save: {}", e)),
            }
        });
    };

    let favorited_class = favorited.clone();

    view! {
        <button
            class="flat-btn star-btn"
            class:active=favorited_class
            title="Save to Collection"
            on:click=toggle
        >
            {move || if favorited() { "★" } else { "☆" }}
        </button>
    }
}

/// Export and delete/unsave buttons of a Collection row
#[component]
fn CollectionActions(
    id: String,
    kind: Option<ExternalKind>,
    recipe: RwSignal<Recipe>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let export = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let recipe = recipe.get_untracked();
        spawn_local(async move {
            match commands::export_recipe(&recipe).await {
                Ok(Some(_)) => ctx.toast("Exported"),
                Ok(None) => {}
                Err(_) => ctx.toast("Export failed"),
            }
        });
    };

    let remove = Callback::new(move |_| {
        let id = id.clone();
        spawn_local(async move {
            match kind {
                None => match commands::delete_custom_recipe(&id).await {
                    Ok(()) => ctx.toast("Recipe deleted"),
                    Err(e) => ctx.toast(format!("Delete failed: {}", e)),
                },
                Some(kind) => match commands::remove_favorite(kind, &id).await {
                    Ok(()) => {
                        store_set_favorited(&store, kind, &id, false);
                        ctx.toast(kind.unsaved_message());
                    }
                    Err(e) => ctx.toast(format!("Unsave failed: {}", e)),
                },
            }
            ctx.reload_collection();
        });
    });

    let (label, prompt) = match kind {
        None => ("Delete", "Delete?"),
        Some(_) => ("Unsave", "Unsave?"),
    };

    view! {
        <div class="row-actions">
            <button class="row-action" on:click=export>"Export"</button>
            <DeleteConfirmButton label=label prompt=prompt on_confirm=remove />
        </div>
    }
}
