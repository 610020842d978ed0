//! FILENAME: core/engine/src/session.rs
//! PURPOSE: Application context behind the two-screen UI.
//! CONTEXT: Owns the store handle, the visible screen, the last applied search
//! filter and the rows shown in the list. Every UI handler goes through here.

use serde::{Deserialize, Serialize};

use crate::command::{create_record, delete_records, list_records, CommandError, Operation};
use crate::record::{ContainerRow, EntryForm};
use crate::store::RecordStore;
use crate::validation::validate_entry;

pub const REGISTERED_MESSAGE: &str = "Container registered successfully!";
pub const DELETED_MESSAGE: &str = "Container deleted successfully!";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this container?";

/// The two mutually exclusive screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Entry,
    List,
}

/// An informational message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            title: "Success".to_string(),
            message: message.into(),
        }
    }
}

/// Result of a create or delete that reached the store.
/// The list is refreshed afterwards; a failed refresh does not undo the
/// write, so it is reported alongside the notice instead of replacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub notice: Notice,
    /// Rows written or removed.
    pub affected: usize,
    pub refresh_error: Option<CommandError>,
}

/// A delete waiting for the user's yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDelete {
    pub number: String,
}

impl PendingDelete {
    pub fn prompt(&self) -> &'static str {
        CONFIRM_DELETE_MESSAGE
    }
}

pub struct AppContext<S> {
    store: S,
    screen: Screen,
    filter: String,
    rows: Vec<ContainerRow>,
}

impl<S: RecordStore> AppContext<S> {
    pub fn new(store: S) -> Self {
        AppContext {
            store,
            screen: Screen::Entry,
            filter: String::new(),
            rows: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Search text the list is filtered by.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Rows currently bound to the list table.
    pub fn rows(&self) -> &[ContainerRow] {
        &self.rows
    }

    /// Create the backing table. Called once at startup.
    pub fn ensure_schema(&self) -> Result<(), CommandError> {
        self.store
            .ensure_schema()
            .map_err(|e| CommandError::storage(Operation::Schema, e))
    }

    /// Switch the visible screen. Does not touch the store.
    pub fn show(&mut self, screen: Screen) -> Screen {
        self.screen = screen;
        self.screen
    }

    /// Re-run the list query with the current search text.
    /// On failure the previously shown rows are cleared.
    pub fn refresh(&mut self) -> Result<&[ContainerRow], CommandError> {
        self.rows.clear();
        let filter = Some(self.filter.as_str()).filter(|f| !f.is_empty());

        let records = list_records(&self.store, filter)?;
        self.rows = records.into_iter().map(ContainerRow::from).collect();
        Ok(self.rows.as_slice())
    }

    /// Track the text currently in the search box without querying.
    /// The next refresh, including the one after a create or delete, uses it.
    pub fn set_filter(&mut self, filter: &str) {
        self.filter.clear();
        self.filter.push_str(filter);
    }

    /// Apply a new search filter and refresh the list.
    pub fn search(&mut self, filter: &str) -> Result<&[ContainerRow], CommandError> {
        self.set_filter(filter);
        self.refresh()
    }

    /// Validate and register the form. Validation failures never reach the store.
    pub fn submit(&mut self, form: &EntryForm) -> Result<Completion, CommandError> {
        let record = validate_entry(form)?;
        create_record(&self.store, &record)?;

        Ok(Completion {
            notice: Notice::success(REGISTERED_MESSAGE),
            affected: 1,
            refresh_error: self.refresh().err(),
        })
    }

    /// Resolve the selected list row into a pending delete.
    /// The number comes from the displayed row, not from the store.
    pub fn request_delete(&self, selection: Option<usize>) -> Result<PendingDelete, CommandError> {
        let row = selection
            .and_then(|index| self.rows.get(index))
            .ok_or(CommandError::NoSelection)?;

        Ok(PendingDelete {
            number: row.number.clone(),
        })
    }

    /// Delete every record sharing the pending number, then refresh.
    pub fn confirm_delete(&mut self, pending: PendingDelete) -> Result<Completion, CommandError> {
        let removed = delete_records(&self.store, &pending.number)?;

        let notice = if removed > 1 {
            Notice::success(format!(
                "{} ({} containers shared this number)",
                DELETED_MESSAGE, removed
            ))
        } else {
            Notice::success(DELETED_MESSAGE)
        };

        Ok(Completion {
            notice,
            affected: removed,
            refresh_error: self.refresh().err(),
        })
    }

    /// Request, confirm and execute a delete in one step.
    /// Returns `Ok(None)` when the user declines.
    pub fn delete_selected<F>(
        &mut self,
        selection: Option<usize>,
        confirm: F,
    ) -> Result<Option<Completion>, CommandError>
    where
        F: FnOnce(&PendingDelete) -> bool,
    {
        let pending = self.request_delete(selection)?;
        if !confirm(&pending) {
            return Ok(None);
        }
        self.confirm_delete(pending).map(Some)
    }
}
