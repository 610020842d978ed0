//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: All UI state lives in one `AppContext` behind a mutex in managed state.

use std::sync::Mutex;

use engine::{AppContext, CommandError};
use persistence::SqliteStore;
use tauri::Manager;

pub mod api_types;
pub mod commands;
pub mod config;
pub mod logging;

pub use api_types::{CompletionReply, DeletePrompt, ErrorKind, ErrorReply, ViewSnapshot};
pub use config::AppConfig;
pub use logging::{init_log_file, install_log_bridge, next_seq, write_log};


// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    pub context: Mutex<AppContext<SqliteStore>>,
    /// Failure of the eager list load at startup, reported by `bootstrap`.
    pub startup_error: Mutex<Option<CommandError>>,
}

/// Prepare the table and load the list before the window shows anything.
/// A schema failure is fatal; a failed initial list load is not.
pub fn create_app_state(store: SqliteStore) -> Result<AppState, CommandError> {
    log_info!("SYS", "Creating AppState, db={}", store.path().display());

    let mut context = AppContext::new(store);
    context.ensure_schema()?;

    let startup_error = match context.refresh() {
        Ok(rows) => {
            log_info!("SYS", "Initial list loaded, {} rows", rows.len());
            None
        }
        Err(e) => {
            log_error!("SYS", "Initial list load failed: {}", e);
            Some(e)
        }
    };

    Ok(AppState {
        context: Mutex::new(context),
        startup_error: Mutex::new(startup_error),
    })
}

// ============================================================================
// ENTRY POINT
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let config = AppConfig::resolve(app.handle());

            match init_log_file(&config.log_path()) {
                Ok(path) => {
                    log_info!("SYS", "Tauri backend starting, log={}", path.display());
                }
                Err(e) => {
                    eprintln!("[LOG_INIT] FAILED: {}", e);
                    eprintln!("[LOG_INIT] Continuing with console-only logging");
                }
            }
            if let Err(e) = install_log_bridge(config.log_level) {
                log_warn!("SYS", "log facade bridge not installed: {}", e);
            }

            let state = create_app_state(SqliteStore::new(config.database_path()))?;
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Navigation commands
            commands::bootstrap,
            commands::switch_screen,
            // Entry screen commands
            commands::format_number_input,
            commands::format_location_input,
            commands::submit_container,
            // List screen commands
            commands::search_containers,
            commands::request_delete,
            commands::confirm_delete,
            // Logging commands
            logging::log_frontend_atomic,
            logging::get_next_seq,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
