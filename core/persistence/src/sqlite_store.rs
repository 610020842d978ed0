//! FILENAME: core/persistence/src/sqlite_store.rs
//! PURPOSE: SQLite-backed container store.
//! CONTEXT: Every call opens its own connection, runs one statement and drops
//! the connection again. No pooling, no explicit transactions.

use std::fs;
use std::path::{Path, PathBuf};

use engine::{ContainerRecord, NewContainer, RecordStore};
use rusqlite::{params, Connection, Row};

use crate::error::PersistenceError;

pub const TABLE_NAME: &str = "containers";

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS containers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        number TEXT NOT NULL,
        tag TEXT NOT NULL,
        location TEXT NOT NULL
    )";

const INSERT_SQL: &str = "INSERT INTO containers (number, tag, location) VALUES (?1, ?2, ?3)";

const LIST_ALL_SQL: &str = "SELECT id, number, tag, location FROM containers";

const LIST_FILTERED_SQL: &str =
    "SELECT id, number, tag, location FROM containers WHERE location LIKE ?1";

const DELETE_SQL: &str = "DELETE FROM containers WHERE number = ?1";

/// Handle to the container data file. Holds only the path.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, PersistenceError> {
        let conn = Connection::open(&self.path)?;
        // LIKE is ASCII case-insensitive by default
        conn.execute_batch("PRAGMA case_sensitive_like = ON;")?;
        Ok(conn)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<ContainerRecord> {
        Ok(ContainerRecord {
            id: row.get(0)?,
            number: row.get(1)?,
            tag: row.get(2)?,
            location: row.get(3)?,
        })
    }
}

impl RecordStore for SqliteStore {
    type Error = PersistenceError;

    fn ensure_schema(&self) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                log::debug!("created data directory {}", parent.display());
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(CREATE_TABLE_SQL)?;
        log::debug!("table {} ready in {}", TABLE_NAME, self.path.display());
        Ok(())
    }

    fn create(&self, record: &NewContainer) -> Result<i64, PersistenceError> {
        let conn = self.connect()?;
        conn.execute(
            INSERT_SQL,
            params![record.number(), record.tag(), record.location()],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("inserted container {} as row {}", record.number(), id);
        Ok(id)
    }

    fn list(&self, filter: Option<&str>) -> Result<Vec<ContainerRecord>, PersistenceError> {
        let conn = self.connect()?;
        let pattern = filter
            .filter(|f| !f.is_empty())
            .map(|f| format!("%{}%", f));

        let records = match &pattern {
            Some(pattern) => {
                let mut stmt = conn.prepare(LIST_FILTERED_SQL)?;
                let rows = stmt.query_map(params![pattern], Self::map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(LIST_ALL_SQL)?;
                let rows = stmt.query_map([], Self::map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        log::debug!(
            "listed {} containers (filter {:?})",
            records.len(),
            filter.unwrap_or("")
        );
        Ok(records)
    }

    fn delete_by_number(&self, number: &str) -> Result<usize, PersistenceError> {
        let conn = self.connect()?;
        let removed = conn.execute(DELETE_SQL, params![number])?;
        log::debug!("deleted {} rows with number {}", removed, number);
        Ok(removed)
    }
}
