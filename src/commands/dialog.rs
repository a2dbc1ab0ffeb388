//! Dialog Commands
//!
//! Frontend binding for native alert dialogs.

use serde::Serialize;

use super::{error_string, invoke};

#[derive(Serialize)]
struct MessageArgs<'a> {
    title: &'a str,
    message: &'a str,
}

/// Show a native message dialog; resolves when dismissed
pub async fn show_message(title: &str, message: &str) -> Result<(), String> {
    let js_args =
        serde_wasm_bindgen::to_value(&MessageArgs { title, message }).map_err(|e| e.to_string())?;
    invoke("show_message", js_args).await.map_err(error_string)?;
    Ok(())
}
