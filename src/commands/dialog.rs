use wasm_bindgen::prelude::*;

use super::call;

/// Native image picker; `None` when cancelled
pub async fn pick_image() -> Result<Option<String>, String> {
    call("pick_image", JsValue::NULL).await
}
