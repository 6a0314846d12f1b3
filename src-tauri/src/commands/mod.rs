//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod app_cmd;
mod collection_cmd;
mod dialog_cmd;
mod export_cmd;
mod favorite_cmd;
mod import_cmd;
mod recipe_cmd;
mod search_cmd;
mod settings_cmd;
mod shopping_cmd;

pub use app_cmd::*;
pub use collection_cmd::*;
pub use dialog_cmd::*;
pub use export_cmd::*;
pub use favorite_cmd::*;
pub use import_cmd::*;
pub use recipe_cmd::*;
pub use search_cmd::*;
pub use settings_cmd::*;
pub use shopping_cmd::*;
