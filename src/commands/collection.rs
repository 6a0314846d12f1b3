//! Collection Commands

use serde::Serialize;

use super::{call, to_args};
use crate::models::{CollectionView, Recipe};

#[derive(Serialize)]
struct FilterArgs<'a> {
    filter: &'a str,
}

#[derive(Serialize)]
struct ExportArgs<'a> {
    recipe: &'a Recipe,
}

pub async fn list_collection(filter: &str) -> Result<CollectionView, String> {
    call("list_collection", to_args(&FilterArgs { filter })?).await
}

/// Path written, or `None` when the save dialog was cancelled
pub async fn export_recipe(recipe: &Recipe) -> Result<Option<String>, String> {
    call("export_recipe", to_args(&ExportArgs { recipe })?).await
}
