//! FILENAME: core/engine/src/store.rs
//! PURPOSE: Storage seam for container records.
//! CONTEXT: The engine never talks SQL. `persistence::SqliteStore` is the
//! production implementation; tests plug in an in-memory store.

use std::fmt::Display;

use crate::record::{ContainerRecord, NewContainer};

pub trait RecordStore {
    /// Underlying failure. Only its text reaches the user.
    type Error: Display;

    /// Create the backing table if it does not exist yet.
    fn ensure_schema(&self) -> Result<(), Self::Error>;

    /// Insert unconditionally and return the assigned id.
    fn create(&self, record: &NewContainer) -> Result<i64, Self::Error>;

    /// Records whose location contains `filter`, or every record when the
    /// filter is `None` or empty. Order is unspecified.
    fn list(&self, filter: Option<&str>) -> Result<Vec<ContainerRecord>, Self::Error>;

    /// Delete every record with this number. Returns the number of rows removed.
    fn delete_by_number(&self, number: &str) -> Result<usize, Self::Error>;
}
