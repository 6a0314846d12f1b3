//! Import Commands
//!
//! Fill the New Recipe form from a recipe web page.

use tauri::State;

use crate::AppState;

/// Whether this build can import from URLs
#[tauri::command]
pub fn scrape_available() -> bool {
    cfg!(feature = "scrape")
}

#[cfg(feature = "scrape")]
#[tauri::command]
pub async fn import_recipe_from_url(
    state: State<'_, AppState>,
    url: String,
) -> Result<crate::services::scrape::ImportedRecipe, String> {
    crate::services::scrape::import_from_url(&state.api, state.custom_recipes.images(), &url)
        .await
        .map_err(|e| {
            log::warn!("Import from {} failed: {}", url, e);
            e.to_string()
        })
}

#[cfg(not(feature = "scrape"))]
#[tauri::command]
pub async fn import_recipe_from_url(
    _state: State<'_, AppState>,
    _url: String,
) -> Result<(), String> {
    Err("Import from URL is not available in this build".to_string())
}
