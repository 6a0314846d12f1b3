//! Settings Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{Settings, Theme};

#[derive(Serialize)]
struct ThemeArgs {
    theme: Theme,
}

pub async fn get_settings() -> Result<Settings, String> {
    call("get_settings", JsValue::NULL).await
}

pub async fn set_theme(theme: Theme) -> Result<Settings, String> {
    call("set_theme", to_args(&ThemeArgs { theme })?).await
}
