//! Ingredient List Component
//!
//! Bulleted ingredients, each with a button adding it to the shopping list.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn IngredientList(ingredients: Vec<String>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="ingredient-list">
            {ingredients
                .into_iter()
                .map(|ingredient| {
                    let item = ingredient.clone();
                    view! {
                        <li class="ingredient-row">
                            <span class="ingredient-text dim">"• " {ingredient}</span>
                            <button
                                class="flat-btn"
                                title="Add to Shopping List"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.add_to_shopping_list(item.clone());
                                }
                            >
                                "+"
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
