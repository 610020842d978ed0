//! FILENAME: app/src-tauri/src/api_types.rs
// PURPOSE: Shared type definitions for Tauri API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.
// The frontend renders every reply as a modal dialog; nothing here knows how.

use engine::{CommandError, Completion, ContainerRow, Screen};
use serde::{Deserialize, Serialize};

/// Error category, so the frontend can pick a dialog without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Validation,
    Storage,
    NoSelection,
    /// Poisoned lock or similar shell-side failure.
    Internal,
}

/// Error returned from every fallible command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReply {
    pub kind: ErrorKind,
    pub title: String,
    pub message: String,
}

impl ErrorReply {
    pub fn internal(message: impl Into<String>) -> Self {
        ErrorReply {
            kind: ErrorKind::Internal,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

impl From<CommandError> for ErrorReply {
    fn from(err: CommandError) -> Self {
        let kind = match &err {
            CommandError::Validation(_) => ErrorKind::Validation,
            CommandError::Storage { .. } => ErrorKind::Storage,
            CommandError::NoSelection => ErrorKind::NoSelection,
        };
        ErrorReply {
            kind,
            title: "Error".to_string(),
            message: err.to_string(),
        }
    }
}

/// What the window should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub screen: Screen,
    pub filter: String,
    pub rows: Vec<ContainerRow>,
}

/// Reply to a successful create or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReply {
    pub title: String,
    pub message: String,
    pub affected: usize,
    /// Rows after the follow-up refresh (empty if it failed).
    pub rows: Vec<ContainerRow>,
    /// Shown after the success dialog when the follow-up refresh failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<ErrorReply>,
}

impl CompletionReply {
    pub fn new(completion: Completion, rows: &[ContainerRow]) -> Self {
        CompletionReply {
            title: completion.notice.title,
            message: completion.notice.message,
            affected: completion.affected,
            rows: rows.to_vec(),
            follow_up: completion.refresh_error.map(ErrorReply::from),
        }
    }
}

/// Confirmation the frontend must obtain before calling `confirm_delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePrompt {
    pub number: String,
    pub title: String,
    pub message: String,
}

impl From<engine::PendingDelete> for DeletePrompt {
    fn from(pending: engine::PendingDelete) -> Self {
        DeletePrompt {
            message: pending.prompt().to_string(),
            title: "Confirm Deletion".to_string(),
            number: pending.number,
        }
    }
}
