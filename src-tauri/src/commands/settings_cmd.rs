//! Settings Commands
//!
//! Theme preference, persisted and pushed to the native window.

use tauri::{AppHandle, Manager, Runtime, State};

use crate::domain::{Settings, Theme};
use crate::AppState;

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    Ok(state.settings.get().await)
}

#[tauri::command]
pub async fn set_theme<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, AppState>,
    theme: Theme,
) -> Result<Settings, String> {
    let settings = state.settings.set_theme(theme).await.map_err(|e| e.to_string())?;
    apply_theme(&app, theme)?;
    Ok(settings)
}

/// `System` hands the choice back to the OS
pub fn apply_theme<R: Runtime>(app: &AppHandle<R>, theme: Theme) -> Result<(), String> {
    #[cfg(desktop)]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        let native = match theme {
            Theme::System => None,
            Theme::Light => Some(tauri::Theme::Light),
            Theme::Dark => Some(tauri::Theme::Dark),
        };
        window.set_theme(native).map_err(|e| e.to_string())?;
    }
    #[cfg(not(desktop))]
    let _ = (app, theme);
    Ok(())
}
