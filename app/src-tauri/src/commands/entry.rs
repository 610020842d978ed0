//! FILENAME: app/src-tauri/src/commands/entry.rs
// PURPOSE: Entry screen commands: keystroke formatting and submission.

use engine::EntryForm;
use tauri::State;

use crate::api_types::{CompletionReply, ErrorReply};
use crate::commands::utils::lock_context;
use crate::logging::{log_debug, log_enter_info, log_exit_info, log_warn};
use crate::AppState;

/// Reformat the number field after a keystroke.
#[tauri::command]
pub fn format_number_input(value: String) -> String {
    let formatted = engine::format_number_input(&value);
    log_debug!("CMD", "format_number_input {:?} -> {:?}", value, formatted);
    formatted
}

/// Reformat the location field after a keystroke.
#[tauri::command]
pub fn format_location_input(value: String) -> String {
    let formatted = engine::format_location_input(&value);
    log_debug!("CMD", "format_location_input {:?} -> {:?}", value, formatted);
    formatted
}

/// Validate and register a container, then refresh the list using the
/// text currently in the search box.
#[tauri::command]
pub fn submit_container(
    state: State<AppState>,
    form: EntryForm,
    filter: String,
) -> Result<CompletionReply, ErrorReply> {
    log_enter_info!(
        "CMD",
        "submit_container",
        "number={:?} location={:?} filter={:?}",
        form.number,
        form.location,
        filter
    );

    let mut context = lock_context(&state)?;
    context.set_filter(&filter);
    let completion = context.submit(&form).map_err(|e| {
        log_warn!("CMD", "submit_container rejected: {}", e);
        ErrorReply::from(e)
    })?;

    if let Some(err) = &completion.refresh_error {
        log_warn!("CMD", "refresh after submit failed: {}", err);
    }
    log_exit_info!("CMD", "submit_container", "{} rows shown", context.rows().len());
    Ok(CompletionReply::new(completion, context.rows()))
}
