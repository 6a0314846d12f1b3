//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod app;
mod collection;
mod dialog;
mod recipe;
mod search;
mod settings;
mod shopping;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the command's error string
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Serialize arguments as plain JS objects (maps included)
fn to_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    args.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

/// Invoke a command and decode its result
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(|e| {
        let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
        web_sys::console::warn_1(&format!("[{}] {}", cmd, message).into());
        message
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// Re-export all public items
pub use app::*;
pub use collection::*;
pub use dialog::*;
pub use recipe::*;
pub use search::*;
pub use settings::*;
pub use shopping::*;
