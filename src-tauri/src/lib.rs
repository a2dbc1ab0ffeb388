//! Sawan Guide Backend
//!
//! Layered architecture:
//! - domain: Core entities and errors
//! - gateway: Remote data access abstractions and implementations
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;

pub mod domain;
pub mod gateway;
mod commands;

use gateway::{BackendConfig, PlaceGateway, RestPlaceGateway};

/// Application state shared across commands
pub struct AppState {
    pub gateway: Arc<dyn PlaceGateway>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            // Initialize logging
            rolling_logger::init_logger(
                app.handle().path().app_log_dir().expect("failed to get log dir"),
                "SawanGuide",
            )
            .expect("failed to init rolling logger");

            eprintln!(
                "[{}] App setup starting",
                chrono::Local::now().format("%H:%M:%S%.3f")
            );

            let config = BackendConfig::from_env();
            log::info!("remote backend configured at {}", config.base_url);

            let gateway: Arc<dyn PlaceGateway> = Arc::new(RestPlaceGateway::new(config));
            app.manage(AppState { gateway });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Remote data gateway
            commands::list_places,
            commands::get_place,
            // Outbound link-outs
            commands::open_map,
            commands::dial_phone,
            // Native alerts
            commands::show_message,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
