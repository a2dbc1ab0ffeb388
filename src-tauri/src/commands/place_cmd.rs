//! Tauri Commands for Place reads
//!
//! Exposes the remote data gateway to the frontend. Failures are folded
//! into strings at this boundary; the views turn them into alerts.

use tauri::State;

use crate::domain::Place;
use crate::AppState;

/// All places, ordered by name ascending
#[tauri::command]
pub async fn list_places(state: State<'_, AppState>) -> Result<Vec<Place>, String> {
    state.gateway.fetch_all().await.map_err(|e| {
        log::error!("list_places failed: {}", e);
        e.to_string()
    })
}

/// One place by id
#[tauri::command]
pub async fn get_place(state: State<'_, AppState>, id: String) -> Result<Place, String> {
    state.gateway.fetch_by_id(&id).await.map_err(|e| {
        log::error!("get_place({}) failed: {}", id, e);
        e.to_string()
    })
}
