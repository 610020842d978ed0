//! FILENAME: core/persistence/tests/common/mod.rs
//! Test harness for SQLite store tests. Each harness gets its own temp directory.

#![allow(dead_code)]

use engine::{validate_entry, AppContext, EntryForm, RecordStore};
use persistence::SqliteStore;
use tempfile::TempDir;

pub struct TestHarness {
    // Keeps the directory alive for the lifetime of the harness
    _dir: TempDir,
    pub store: SqliteStore,
}

impl TestHarness {
    /// Store with the schema already created.
    pub fn new() -> Self {
        let harness = Self::unprepared();
        harness.store.ensure_schema().unwrap();
        harness
    }

    /// Store pointing at a data file that does not exist yet.
    pub fn unprepared() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("data").join("containers.db"));
        TestHarness { _dir: dir, store }
    }

    pub fn insert(&self, number: &str, tag: &str, location: &str) -> i64 {
        let record = validate_entry(&EntryForm::new(number, tag, location)).unwrap();
        self.store.create(&record).unwrap()
    }

    /// `(number, tag, location)` triples for the given filter, sorted so
    /// assertions do not depend on storage order.
    pub fn triples(&self, filter: Option<&str>) -> Vec<(String, String, String)> {
        let mut triples: Vec<_> = self
            .store
            .list(filter)
            .unwrap()
            .into_iter()
            .map(|r| (r.number, r.tag, r.location))
            .collect();
        triples.sort();
        triples
    }

    pub fn context(&self) -> AppContext<SqliteStore> {
        AppContext::new(self.store.clone())
    }
}

pub fn triple(number: &str, tag: &str, location: &str) -> (String, String, String) {
    (number.to_string(), tag.to_string(), location.to_string())
}
