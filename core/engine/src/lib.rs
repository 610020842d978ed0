//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the container registry engine.
//! CONTEXT: Validation, input formatting, the store seam, the command layer
//! and the application context. No SQL and no UI toolkit in here.

pub mod command;
pub mod input_format;
pub mod record;
pub mod session;
pub mod store;
pub mod validation;

// Re-export commonly used types at the crate root
pub use command::{
    create_record, delete_records, dispatch, list_records, CommandError, Operation, Request,
    Response,
};
pub use input_format::{format_location_input, format_number_input};
pub use record::{ContainerRecord, ContainerRow, EntryForm, NewContainer};
pub use session::{AppContext, Completion, Notice, PendingDelete, Screen};
pub use store::RecordStore;
pub use validation::{validate_entry, validate_location, validate_number, ValidationError};
