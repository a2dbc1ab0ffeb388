//! Place Commands
//!
//! Frontend bindings for the remote data gateway commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;

use crate::models::Place;
use super::{error_string, invoke};

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

/// All places, ordered by name ascending
pub async fn list_places() -> Result<Vec<Place>, String> {
    let result = invoke("list_places", JsValue::NULL).await.map_err(error_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// One place by id; "not found" and transport errors both reject
pub async fn get_place(id: &str) -> Result<Place, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("get_place", js_args).await.map_err(error_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
