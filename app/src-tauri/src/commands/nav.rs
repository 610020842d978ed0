//! FILENAME: app/src-tauri/src/commands/nav.rs
// PURPOSE: Initial view and screen switching.

use engine::Screen;
use tauri::State;

use crate::api_types::{ErrorReply, ViewSnapshot};
use crate::commands::utils::{lock_context, snapshot};
use crate::logging::{log_enter_info, log_error, log_exit_info};
use crate::AppState;

/// Current view, loaded eagerly at startup.
/// A failed initial list load is reported once, on the first call.
#[tauri::command]
pub fn bootstrap(state: State<AppState>) -> Result<ViewSnapshot, ErrorReply> {
    log_enter_info!("CMD", "bootstrap");

    let startup_error = state
        .startup_error
        .lock()
        .map_err(|e| ErrorReply::internal(e.to_string()))?
        .take();
    if let Some(err) = startup_error {
        log_error!("CMD", "bootstrap: {}", err);
        return Err(err.into());
    }

    let context = lock_context(&state)?;
    log_exit_info!("CMD", "bootstrap", "{} rows", context.rows().len());
    Ok(snapshot(&context))
}

/// Show the other screen. No query is issued.
#[tauri::command]
pub fn switch_screen(state: State<AppState>, screen: Screen) -> Result<ViewSnapshot, ErrorReply> {
    let mut context = lock_context(&state)?;
    context.show(screen);
    log_enter_info!("CMD", "switch_screen", "{:?}", screen);
    Ok(snapshot(&context))
}
