//! Tauri Commands for outbound link-outs
//!
//! Dispatches map and dialer URLs to the host platform via the shell
//! plugin. Only URL construction and provider fallback live here.

use tauri::{command, AppHandle, Runtime};
use tauri_plugin_shell::ShellExt;

use crate::domain::DomainError;

/// Open an external map application at the given coordinates.
///
/// Tries the primary web-map provider first and falls back to the
/// secondary one; when neither launches the caller gets an error to alert
/// on.
#[command]
pub async fn open_map<R: Runtime>(
    app: AppHandle<R>,
    latitude: f64,
    longitude: f64,
) -> Result<(), String> {
    let google = format!("https://maps.google.com/?q={},{}", latitude, longitude);
    let apple = format!("https://maps.apple.com/?q={},{}", latitude, longitude);

    if app.shell().open(google, None).is_ok() {
        return Ok(());
    }
    log::warn!("primary map provider failed, trying fallback");

    app.shell().open(apple, None).map_err(|e| {
        log::error!("no map provider could be launched: {}", e);
        DomainError::Internal("no map application available".to_string()).to_string()
    })
}

/// Open the device dialer with the given number
#[command]
pub async fn dial_phone<R: Runtime>(app: AppHandle<R>, number: String) -> Result<(), String> {
    if number.is_empty() {
        return Err(DomainError::InvalidInput("empty phone number".to_string()).to_string());
    }

    app.shell()
        .open(format!("tel:{}", number), None)
        .map_err(|e| {
            log::error!("dialer launch failed: {}", e);
            e.to_string()
        })
}
