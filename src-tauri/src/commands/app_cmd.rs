//! Application Commands
//!
//! About information, the project website and quitting.

use serde::Serialize;
use tauri::{AppHandle, Manager, Runtime};

pub const APP_NAME: &str = "Bistro";
pub const APP_DESCRIPTION: &str = "A simple app to find drinks and recipes.";
pub const APP_WEBSITE: &str = "https://github.com/cadmium-cmyk/Bistro/";
pub const APP_LICENSE: &str = "MIT";

#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub website: String,
    pub license: String,
}

#[tauri::command]
pub fn app_info<R: Runtime>(app: AppHandle<R>) -> AppInfo {
    AppInfo {
        name: APP_NAME.to_string(),
        version: app.package_info().version.to_string(),
        description: APP_DESCRIPTION.to_string(),
        website: APP_WEBSITE.to_string(),
        license: APP_LICENSE.to_string(),
    }
}

#[tauri::command]
pub async fn open_website() -> Result<(), String> {
    open::that(APP_WEBSITE).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn quit_app<R: Runtime>(app: AppHandle<R>) {
    log::info!("Quit requested");
    app.exit(0);
}
