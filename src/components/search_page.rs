//! Search Page Component
//!
//! Search tab shared by cocktails and meals: mode selector, debounced query
//! and a random pick. Results come back merged with local favorites.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{RecipeRow, RowMode};
use crate::commands;
use crate::context::use_app_context;
use crate::models::{ExternalKind, RecipeCard, SearchMode};
use crate::request_slot::RequestSlot;

/// Quiet period before a typed query is sent
const DEBOUNCE_MS: u32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Loading,
    Done,
}

#[component]
pub fn SearchPage(kind: ExternalKind) -> impl IntoView {
    let ctx = use_app_context();
    let mode = RwSignal::new(SearchMode::Name);
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<RecipeCard>::new());
    let status = RwSignal::new(Status::Idle);
    let slot = StoredValue::new(RequestSlot::new());

    let run_search = move |text: String, debounce: bool| {
        if text.trim().is_empty() {
            slot.with_value(|s| s.invalidate());
            results.set(Vec::new());
            status.set(Status::Idle);
            return;
        }
        let ticket = slot.with_value(|s| s.issue());
        let search_mode = mode.get_untracked();
        let slot = slot.get_value();
        spawn_local(async move {
            let delay = async move {
                if debounce {
                    TimeoutFuture::new(DEBOUNCE_MS).await;
                }
            };
            let request = || {
                status.set(Status::Loading);
                commands::search_recipes(kind, search_mode, text.trim())
            };
            slot.settle(ticket, delay, request, |result| match result {
                Ok(outcome) => {
                    if outcome.remote_error.is_some() {
                        ctx.toast("Fetch failed");
                    }
                    results.set(outcome.cards);
                    status.set(Status::Done);
                }
                Err(_) => {
                    ctx.toast("Fetch failed");
                    results.set(Vec::new());
                    status.set(Status::Done);
                }
            })
            .await;
        });
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        query.set(text.clone());
        run_search(text, true);
    };

    let on_mode_change = move |ev| {
        mode.set(SearchMode::from_label(&event_target_value(&ev)));
        run_search(query.get_untracked(), false);
    };

    let surprise = move |_| {
        let ticket = slot.with_value(|s| s.issue());
        let slot = slot.get_value();
        status.set(Status::Loading);
        spawn_local(async move {
            let request = || commands::random_recipe(kind);
            slot.settle(ticket, async {}, request, |result| {
                match result {
                    Ok(card) => results.set(card.into_iter().collect()),
                    Err(_) => {
                        ctx.toast("Fetch failed");
                        results.set(Vec::new());
                    }
                }
                status.set(Status::Done);
            })
            .await;
        });
    };

    view! {
        <section class="search-page">
            <h2 class="page-title">{kind.search_title()}</h2>
            <div class="search-controls">
                <select class="search-mode" on:change=on_mode_change>
                    {SearchMode::ALL
                        .into_iter()
                        .map(|m| view! { <option value=m.label()>{m.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="search"
                    class="search-input"
                    placeholder=kind.search_placeholder()
                    prop:value=move || query.get()
                    on:input=on_input
                />
            </div>
            <button class="pill-btn" on:click=surprise>"Surprise Me!"</button>

            {move || match status.get() {
                Status::Idle => view! { <p class="status-label dim">"Search to get started"</p> }.into_any(),
                Status::Loading => view! { <p class="status-label dim">"Searching..."</p> }.into_any(),
                Status::Done if results.with(Vec::is_empty) => {
                    view! { <p class="status-label dim">"No recipes found."</p> }.into_any()
                }
                Status::Done => ().into_any(),
            }}

            <div class="recipe-list">
                <For
                    each=move || results.get()
                    key=|card| card.key()
                    children=move |card| view! { <RecipeRow card=card mode=RowMode::Search /> }
                />
            </div>
        </section>
    }
}
