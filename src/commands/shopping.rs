//! Shopping List Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::AddOutcome;

#[derive(Serialize)]
struct ItemArgs<'a> {
    item: &'a str,
}

pub async fn list_shopping_items() -> Result<Vec<String>, String> {
    call("list_shopping_items", JsValue::NULL).await
}

pub async fn add_shopping_item(item: &str) -> Result<AddOutcome, String> {
    call("add_shopping_item", to_args(&ItemArgs { item })?).await
}

pub async fn remove_shopping_item(item: &str) -> Result<bool, String> {
    call("remove_shopping_item", to_args(&ItemArgs { item })?).await
}
