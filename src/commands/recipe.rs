//! Custom Recipe Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{ImportedRecipe, RecipeCard, RecipeDraft};

#[derive(Serialize)]
struct DraftArgs<'a> {
    draft: &'a RecipeDraft,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UrlArgs<'a> {
    url: &'a str,
}

pub async fn create_custom_recipe(draft: &RecipeDraft) -> Result<RecipeCard, String> {
    call("create_custom_recipe", to_args(&DraftArgs { draft })?).await
}

pub async fn delete_custom_recipe(id: &str) -> Result<(), String> {
    call("delete_custom_recipe", to_args(&IdArgs { id })?).await
}

pub async fn import_recipe_from_url(url: &str) -> Result<ImportedRecipe, String> {
    call("import_recipe_from_url", to_args(&UrlArgs { url })?).await
}

/// Whether this build can import from URLs
pub async fn scrape_available() -> Result<bool, String> {
    call("scrape_available", JsValue::NULL).await
}
