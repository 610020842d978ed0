//! FILENAME: app/src-tauri/src/commands/list.rs
// PURPOSE: List screen commands: search and two-step delete.
// CONTEXT: Delete is split so the frontend can ask the user in between.

use engine::{ContainerRow, PendingDelete};
use tauri::State;

use crate::api_types::{CompletionReply, DeletePrompt, ErrorReply};
use crate::commands::utils::lock_context;
use crate::logging::{log_enter_info, log_exit_info, log_warn};
use crate::AppState;

/// Apply a location filter. An empty filter lists everything.
#[tauri::command]
pub fn search_containers(
    state: State<AppState>,
    filter: String,
) -> Result<Vec<ContainerRow>, ErrorReply> {
    log_enter_info!("CMD", "search_containers", "filter={:?}", filter);

    let mut context = lock_context(&state)?;
    let rows = context.search(&filter).map_err(|e| {
        log_warn!("CMD", "search_containers failed: {}", e);
        ErrorReply::from(e)
    })?;

    log_exit_info!("CMD", "search_containers", "{} rows", rows.len());
    Ok(rows.to_vec())
}

/// Resolve the selected row. Touches no storage.
#[tauri::command]
pub fn request_delete(
    state: State<AppState>,
    selection: Option<usize>,
) -> Result<DeletePrompt, ErrorReply> {
    let context = lock_context(&state)?;
    let pending = context.request_delete(selection).map_err(ErrorReply::from)?;
    log_enter_info!("CMD", "request_delete", "number={}", pending.number);
    Ok(pending.into())
}

/// Delete every container with `number`. Call only after the user said yes.
/// The follow-up refresh uses the text currently in the search box.
#[tauri::command]
pub fn confirm_delete(
    state: State<AppState>,
    number: String,
    filter: String,
) -> Result<CompletionReply, ErrorReply> {
    log_enter_info!("CMD", "confirm_delete", "number={} filter={:?}", number, filter);

    let mut context = lock_context(&state)?;
    context.set_filter(&filter);
    let completion = context
        .confirm_delete(PendingDelete {
            number: number.clone(),
        })
        .map_err(|e| {
            log_warn!("CMD", "confirm_delete failed: {}", e);
            ErrorReply::from(e)
        })?;

    if completion.affected > 1 {
        log_warn!(
            "CMD",
            "confirm_delete removed {} containers sharing number {}",
            completion.affected,
            number
        );
    }
    if let Some(err) = &completion.refresh_error {
        log_warn!("CMD", "refresh after delete failed: {}", err);
    }
    log_exit_info!("CMD", "confirm_delete", "removed={}", completion.affected);
    Ok(CompletionReply::new(completion, context.rows()))
}
