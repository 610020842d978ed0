//! FILENAME: core/engine/src/command.rs
//! PURPOSE: Request objects for the record store and their typed outcomes.
//! CONTEXT: Each user action maps to exactly one `Request`, and `dispatch`
//! issues exactly one store call for it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{ContainerRecord, NewContainer};
use crate::store::RecordStore;
use crate::validation::ValidationError;

// ============================================================================
// REQUESTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create(NewContainer),
    List { filter: Option<String> },
    Delete { number: String },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Create(_) => Operation::Create,
            Request::List { .. } => Operation::List,
            Request::Delete { .. } => Operation::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Created { id: i64 },
    Listed(Vec<ContainerRecord>),
    Deleted { removed: usize },
}

/// The store step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Schema,
    Create,
    List,
    Delete,
}

impl Operation {
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Schema => "Error preparing container table",
            Operation::Create => "Error registering container",
            Operation::List => "Error querying containers",
            Operation::Delete => "Error deleting container",
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}: {message}", .operation.failure_prefix())]
    Storage { operation: Operation, message: String },

    #[error("Select a container to delete!")]
    NoSelection,
}

impl CommandError {
    pub fn storage(operation: Operation, err: impl std::fmt::Display) -> Self {
        CommandError::Storage {
            operation,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Execute one request against the store.
pub fn dispatch<S>(store: &S, request: Request) -> Result<Response, CommandError>
where
    S: RecordStore + ?Sized,
{
    match request {
        Request::Create(record) => create_record(store, &record).map(|id| Response::Created { id }),
        Request::List { filter } => list_records(store, filter.as_deref()).map(Response::Listed),
        Request::Delete { number } => {
            delete_records(store, &number).map(|removed| Response::Deleted { removed })
        }
    }
}

// Typed forms of each request, for callers that know which answer they expect.

pub fn create_record<S>(store: &S, record: &NewContainer) -> Result<i64, CommandError>
where
    S: RecordStore + ?Sized,
{
    store
        .create(record)
        .map_err(|e| CommandError::storage(Operation::Create, e))
}

pub fn list_records<S>(store: &S, filter: Option<&str>) -> Result<Vec<ContainerRecord>, CommandError>
where
    S: RecordStore + ?Sized,
{
    store
        .list(filter)
        .map_err(|e| CommandError::storage(Operation::List, e))
}

pub fn delete_records<S>(store: &S, number: &str) -> Result<usize, CommandError>
where
    S: RecordStore + ?Sized,
{
    store
        .delete_by_number(number)
        .map_err(|e| CommandError::storage(Operation::Delete, e))
}
