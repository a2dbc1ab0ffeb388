//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod places;
mod links;
mod dialog;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejected commands carry the backend's error string
fn error_string(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

// Re-export all public items
pub use dialog::*;
pub use links::*;
pub use places::*;
