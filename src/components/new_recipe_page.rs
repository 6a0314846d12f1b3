//! New Recipe Page Component
//!
//! Form for authoring a custom recipe, optionally pre-filled from a web page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{ImportedRecipe, RecipeDraft};
use crate::navigation::Page;
use crate::request_slot::RequestSlot;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Ingredient input row; `id` keys the row across edits
#[derive(Debug, Clone, Copy, PartialEq)]
struct IngredientField {
    id: u32,
    text: RwSignal<String>,
}

fn remove_ingredient(fields: &mut Vec<IngredientField>, id: u32) {
    fields.retain(|f| f.id != id);
}

/// Form values an import overwrites; `None` leaves the field as typed
#[derive(Debug, PartialEq)]
struct ImportedFields {
    name: Option<String>,
    instructions: Option<String>,
    /// Always replaces the rows; one blank row when nothing was found
    ingredients: Vec<String>,
    image_path: Option<String>,
}

fn imported_fields(imported: ImportedRecipe) -> ImportedFields {
    let non_blank = |s: String| (!s.trim().is_empty()).then_some(s);
    let ingredients = if imported.ingredients.is_empty() {
        vec![String::new()]
    } else {
        imported.ingredients
    };
    ImportedFields {
        name: non_blank(imported.name),
        instructions: non_blank(imported.instructions),
        ingredients,
        image_path: imported.image_path,
    }
}

/// Last path component, for showing the picked image
fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[component]
pub fn NewRecipePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let instructions = RwSignal::new(String::new());
    let image_path = RwSignal::new(None::<String>);
    let ingredients = RwSignal::new(vec![IngredientField {
        id: 0,
        text: RwSignal::new(String::new()),
    }]);
    let next_field_id = StoredValue::new(1u32);
    let saving = RwSignal::new(false);

    let import_url = RwSignal::new(String::new());
    let importing = RwSignal::new(false);
    let import_slot = StoredValue::new(RequestSlot::new());

    let set_ingredients = move |lines: Vec<String>| {
        let fields = lines
            .into_iter()
            .map(|line| {
                let id = next_field_id.get_value();
                next_field_id.set_value(id + 1);
                IngredientField {
                    id,
                    text: RwSignal::new(line),
                }
            })
            .collect();
        ingredients.set(fields);
    };

    let add_ingredient = move |_| {
        let id = next_field_id.get_value();
        next_field_id.set_value(id + 1);
        ingredients.update(|f| {
            f.push(IngredientField {
                id,
                text: RwSignal::new(String::new()),
            })
        });
    };

    let apply_import = move |imported: ImportedRecipe| {
        let fields = imported_fields(imported);
        if let Some(text) = fields.name {
            name.set(text);
        }
        if let Some(text) = fields.instructions {
            instructions.set(text);
        }
        set_ingredients(fields.ingredients);
        if fields.image_path.is_some() {
            image_path.set(fields.image_path);
        }
    };

    let import = move |_| {
        let url = import_url.get_untracked();
        if url.trim().is_empty() {
            return;
        }
        importing.set(true);
        let ticket = import_slot.with_value(|s| s.issue());
        spawn_local(async move {
            let result = commands::import_recipe_from_url(url.trim()).await;
            import_slot.with_value(|s| {
                s.apply_if_current(ticket, || {
                    importing.set(false);
                    match result {
                        Ok(imported) => {
                            apply_import(imported);
                            ctx.toast("Recipe imported!");
                        }
                        Err(e) => ctx.toast(format!("Import failed: {}", e)),
                    }
                })
            });
        });
    };

    let pick_image = move |_| {
        spawn_local(async move {
            match commands::pick_image().await {
                Ok(Some(path)) => image_path.set(Some(path)),
                Ok(None) => {}
                Err(e) => ctx.toast(format!("Could not open file: {}", e)),
            }
        });
    };

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let draft = RecipeDraft {
            name: name.get_untracked(),
            category: category.get_untracked(),
            ingredients: ingredients.with_untracked(|f| f.iter().map(|i| i.text.get_untracked()).collect()),
            instructions: instructions.get_untracked(),
            image_path: image_path.get_untracked(),
        };
        if draft.name.trim().is_empty() {
            ctx.toast("Name is required");
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = commands::create_custom_recipe(&draft).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    ctx.reload_collection();
                    ctx.pop_page();
                }
                Err(e) if e == "Name is required" => ctx.toast(e),
                Err(e) => ctx.toast(format!("Failed to save recipe: {}", e)),
            }
        });
    };

    view! {
        <div class="page new-recipe-page">
            <header class="header-bar">
                <button class="flat-btn" title="Back" on:click=move |_| ctx.pop_page()>"‹"</button>
                <span class="header-title">{Page::NewRecipe.title()}</span>
                <button class="suggested-btn" disabled=move || saving.get() on:click=save>"Save"</button>
            </header>

            <div class="form-body">
                <Show when=move || store.scrape_available().get()>
                    <fieldset class="form-group">
                        <legend>"Import from URL"</legend>
                        <div class="import-row">
                            <input
                                type="url"
                                placeholder="https://..."
                                prop:value=move || import_url.get()
                                on:input=move |ev| import_url.set(event_target_value(&ev))
                            />
                            <button class="pill-btn" disabled=move || importing.get() on:click=import>
                                {move || if importing.get() { "Importing..." } else { "Import" }}
                            </button>
                        </div>
                    </fieldset>
                </Show>

                <fieldset class="form-group">
                    <legend>"Details"</legend>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <div class="image-row">
                        <span class="dim">
                            {move || {
                                image_path
                                    .get()
                                    .map(|p| file_name(&p).to_string())
                                    .unwrap_or_else(|| "None selected".to_string())
                            }}
                        </span>
                        <button class="pill-btn" on:click=pick_image>"Choose Image"</button>
                    </div>
                </fieldset>

                <fieldset class="form-group">
                    <legend>"Ingredients"</legend>
                    <For
                        each=move || ingredients.get()
                        key=|field| field.id
                        children=move |field| {
                            let position = move || {
                                ingredients
                                    .with(|f| f.iter().position(|i| i.id == field.id))
                                    .map(|p| p + 1)
                                    .unwrap_or(0)
                            };
                            view! {
                                <div class="ingredient-row">
                                    <input
                                        type="text"
                                        placeholder=move || format!("Item {}", position())
                                        prop:value=move || field.text.get()
                                        on:input=move |ev| field.text.set(event_target_value(&ev))
                                    />
                                    <button
                                        class="flat-btn"
                                        title="Remove"
                                        on:click=move |_| ingredients.update(|f| remove_ingredient(f, field.id))
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            }
                        }
                    />
                    <button class="pill-btn" on:click=add_ingredient>"Add Ingredient"</button>
                </fieldset>

                <fieldset class="form-group">
                    <legend>"Instructions"</legend>
                    <textarea
                        rows="8"
                        prop:value=move || instructions.get()
                        on:input=move |ev| instructions.set(event_target_value(&ev))
                    ></textarea>
                </fieldset>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_handles_both_separators() {
        assert_eq!(file_name("/home/me/pics/tea.png"), "tea.png");
        assert_eq!(file_name("C:\\pics\\tea.png"), "tea.png");
        assert_eq!(file_name("tea.png"), "tea.png");
    }

    fn imported(name: &str, ingredients: &[&str], instructions: &str) -> ImportedRecipe {
        ImportedRecipe {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: instructions.to_string(),
            image_path: None,
        }
    }

    #[test]
    fn test_import_keeps_typed_name_and_instructions_when_blank() {
        let fields = imported_fields(imported("  ", &["2 eggs"], ""));
        assert_eq!(fields.name, None);
        assert_eq!(fields.instructions, None);
        assert_eq!(fields.ingredients, vec!["2 eggs".to_string()]);
        assert_eq!(fields.image_path, None);
    }

    #[test]
    fn test_import_without_ingredients_leaves_one_blank_row() {
        let fields = imported_fields(imported("Shakshuka", &[], "Simmer."));
        assert_eq!(fields.name.as_deref(), Some("Shakshuka"));
        assert_eq!(fields.instructions.as_deref(), Some("Simmer."));
        assert_eq!(fields.ingredients, vec![String::new()]);
    }

    #[test]
    fn test_remove_ingredient_drops_only_that_row() {
        let mut fields: Vec<IngredientField> = ["eggs", "tomato", "cumin"]
            .iter()
            .enumerate()
            .map(|(i, text)| IngredientField {
                id: i as u32,
                text: RwSignal::new(text.to_string()),
            })
            .collect();

        remove_ingredient(&mut fields, 1);

        let ids: Vec<u32> = fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(fields[1].text.get_untracked(), "cumin");

        remove_ingredient(&mut fields, 7);
        assert_eq!(fields.len(), 2);
    }
}
