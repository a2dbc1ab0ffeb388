//! Outbound Link Commands
//!
//! Frontend bindings for map and dialer link-outs.

use serde::Serialize;

use super::{error_string, invoke};

#[derive(Serialize)]
struct CoordinateArgs {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize)]
struct PhoneArgs<'a> {
    number: &'a str,
}

/// Open an external map application at the given coordinates.
/// Errors when neither map provider can be launched.
pub async fn open_map(latitude: f64, longitude: f64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&CoordinateArgs { latitude, longitude })
        .map_err(|e| e.to_string())?;
    invoke("open_map", js_args).await.map_err(error_string)?;
    Ok(())
}

/// Open the device dialer with the given number
pub async fn dial_phone(number: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PhoneArgs { number }).map_err(|e| e.to_string())?;
    invoke("dial_phone", js_args).await.map_err(error_string)?;
    Ok(())
}
