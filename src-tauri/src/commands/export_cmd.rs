//! Export Command

use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::DialogExt;

use crate::domain::Recipe;
use crate::services::export::{export_file_name, write_export};

/// Save a recipe as text. Returns the written path, or `None` if the user
/// cancelled the dialog.
#[tauri::command]
pub async fn export_recipe<R: Runtime>(
    app: AppHandle<R>,
    recipe: Recipe,
) -> Result<Option<String>, String> {
    let view = recipe.view();
    let target = app
        .dialog()
        .file()
        .set_file_name(export_file_name(&view))
        .add_filter("Text", &["txt"])
        .blocking_save_file();

    let Some(target) = target else {
        return Ok(None);
    };
    let path = target.into_path().map_err(|e| e.to_string())?;
    write_export(&path, &view).await.map_err(|e| {
        log::error!("Export to {} failed: {}", path.display(), e);
        e.to_string()
    })?;
    Ok(Some(path.to_string_lossy().into_owned()))
}
