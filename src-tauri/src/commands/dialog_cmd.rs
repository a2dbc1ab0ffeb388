//! Tauri Commands for native alert dialogs

use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Show a native message dialog; resolves once dismissed
#[command]
pub async fn show_message<R: Runtime>(
    app: AppHandle<R>,
    title: String,
    message: String,
) -> Result<(), String> {
    app.dialog()
        .message(message)
        .title(title)
        .kind(MessageDialogKind::Info)
        .blocking_show();
    Ok(())
}
