//! Bistro Backend
//!
//! Layered architecture:
//! - domain: Recipes, favorites, shopping list and settings
//! - repository: JSON file stores
//! - services: Recipe API client, search merge, export, page import
//! - commands: Tauri command handlers

use percent_encoding::percent_decode_str;
use std::path::PathBuf;
use tauri::Manager;

mod commands;
mod domain;
mod repository;
mod services;

use domain::{DomainError, DomainResult, ExternalKind};
use repository::{
    CustomRecipeRepository, DataPaths, FavoritesRepository, ImageStore, SettingsRepository,
    ShoppingListRepository,
};
use services::RecipeApi;

/// URI scheme the webview uses for pictures in the owned image directory
const IMAGE_SCHEME: &str = "recipe-image";

/// Application state shared across commands
pub struct AppState {
    pub paths: DataPaths,
    pub api: RecipeApi,
    pub cocktails: FavoritesRepository,
    pub meals: FavoritesRepository,
    pub custom_recipes: CustomRecipeRepository,
    pub shopping_list: ShoppingListRepository,
    pub settings: SettingsRepository,
}

impl AppState {
    /// Load every store once; commands share these instances
    pub async fn load(paths: DataPaths) -> DomainResult<Self> {
        Ok(Self {
            api: RecipeApi::new()?,
            cocktails: FavoritesRepository::load(ExternalKind::Cocktail, &paths).await,
            meals: FavoritesRepository::load(ExternalKind::Meal, &paths).await,
            custom_recipes: CustomRecipeRepository::load(&paths).await?,
            shopping_list: ShoppingListRepository::load(&paths).await,
            settings: SettingsRepository::load(&paths).await,
            paths,
        })
    }

    pub fn favorites(&self, kind: ExternalKind) -> &FavoritesRepository {
        match kind {
            ExternalKind::Cocktail => &self.cocktails,
            ExternalKind::Meal => &self.meals,
        }
    }
}

/// Resolve per-user and bundled directories from the app handle
fn data_paths(app_handle: &tauri::AppHandle) -> DomainResult<DataPaths> {
    let data_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| DomainError::Internal(format!("No app data dir: {}", e)))?;
    std::fs::create_dir_all(&data_dir)?;
    let resource_dir = app_handle.path().resource_dir().ok();
    Ok(DataPaths::new(data_dir, resource_dir))
}

/// Strip the leading slash the URI adds before Windows drive letters
fn request_path(uri_path: &str) -> PathBuf {
    let path = percent_decode_str(uri_path).decode_utf8_lossy().to_string();
    let path = if path.starts_with('/') && path.chars().nth(2) == Some(':') {
        path[1..].to_string()
    } else {
        path
    };
    PathBuf::from(path)
}

fn image_response(images: Option<&ImageStore>, uri_path: &str) -> tauri::http::Response<Vec<u8>> {
    let status = |code: u16| {
        let mut response = tauri::http::Response::new(Vec::new());
        *response.status_mut() = tauri::http::StatusCode::from_u16(code)
            .unwrap_or(tauri::http::StatusCode::INTERNAL_SERVER_ERROR);
        response
    };

    let Some(images) = images else {
        return status(503);
    };
    let path = match images.resolve(&request_path(uri_path)) {
        Ok(path) => path,
        Err(_) => return status(404),
    };
    match std::fs::read(&path) {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
            let mut response = tauri::http::Response::new(content);
            if let Ok(value) = tauri::http::HeaderValue::from_str(mime_type.as_ref()) {
                response.headers_mut().insert(tauri::http::header::CONTENT_TYPE, value);
            }
            response.headers_mut().insert(
                tauri::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
                tauri::http::HeaderValue::from_static("*"),
            );
            response
        }
        Err(e) => {
            log::warn!("Failed to read image {}: {}", path.display(), e);
            status(500)
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let result = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .register_asynchronous_uri_scheme_protocol(IMAGE_SCHEME, |ctx, request, responder| {
            let images = ctx
                .app_handle()
                .try_state::<AppState>()
                .map(|state| state.custom_recipes.images().clone());
            let uri_path = request.uri().path().to_string();
            std::thread::spawn(move || {
                responder.respond(image_response(images.as_ref(), &uri_path));
            });
        })
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.unminimize();
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            let log_dir = app_handle.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(log_dir, "Bistro") {
                eprintln!("Logging disabled: {}", e);
            }

            let paths = data_paths(&app_handle)?;
            log::info!("Data directory: {}", paths.data_dir().display());

            let state = tauri::async_runtime::block_on(AppState::load(paths))?;
            let theme = tauri::async_runtime::block_on(state.settings.get()).theme;
            app.manage(state);

            if let Err(e) = commands::apply_theme(&app_handle, theme) {
                log::warn!("Failed to apply theme: {}", e);
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Search
            commands::search_recipes,
            commands::random_recipe,
            commands::lookup_recipe,
            // Favorites
            commands::toggle_favorite,
            commands::remove_favorite,
            commands::list_favorite_ids,
            // Collection + custom recipes
            commands::list_collection,
            commands::create_custom_recipe,
            commands::delete_custom_recipe,
            // Shopping list
            commands::list_shopping_items,
            commands::add_shopping_item,
            commands::remove_shopping_item,
            // Settings
            commands::get_settings,
            commands::set_theme,
            // Files
            commands::export_recipe,
            commands::pick_image,
            // Import
            commands::scrape_available,
            commands::import_recipe_from_url,
            // App
            commands::app_info,
            commands::open_website,
            commands::quit_app,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        log::error!("Error while running tauri application: {}", e);
        std::process::exit(1);
    }
}
