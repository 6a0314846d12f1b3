//! Application Commands

use wasm_bindgen::prelude::*;

use super::call;
use crate::models::AppInfo;

pub async fn app_info() -> Result<AppInfo, String> {
    call("app_info", JsValue::NULL).await
}

pub async fn open_website() -> Result<(), String> {
    call("open_website", JsValue::NULL).await
}

pub async fn quit_app() -> Result<(), String> {
    call("quit_app", JsValue::NULL).await
}
