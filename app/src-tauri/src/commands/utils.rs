//! FILENAME: app/src-tauri/src/commands/utils.rs
// PURPOSE: Shared helpers for command handlers.

use std::sync::MutexGuard;

use engine::AppContext;
use persistence::SqliteStore;

use crate::api_types::{ErrorReply, ViewSnapshot};
use crate::AppState;

pub fn lock_context(state: &AppState) -> Result<MutexGuard<'_, AppContext<SqliteStore>>, ErrorReply> {
    state
        .context
        .lock()
        .map_err(|e| ErrorReply::internal(e.to_string()))
}

pub fn snapshot(context: &AppContext<SqliteStore>) -> ViewSnapshot {
    ViewSnapshot {
        screen: context.screen(),
        filter: context.filter().to_string(),
        rows: context.rows().to_vec(),
    }
}
