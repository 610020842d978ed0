//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for Container Registry backend integration tests.

#![allow(dead_code)]

use app_lib::{create_app_state, AppState};
use engine::EntryForm;
use persistence::SqliteStore;
use tempfile::TempDir;

/// Test harness for creating and managing test state.
pub struct TestHarness {
    _dir: TempDir,
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness over an empty data file.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("containers.db"));
        TestHarness {
            state: create_app_state(store).unwrap(),
            _dir: dir,
        }
    }

    /// Create a harness with a few registered containers.
    pub fn with_sample_data() -> Self {
        let harness = Self::new();
        for (number, tag, location) in [
            ("4521", "Blue", "100-200"),
            ("4521", "Green", "100-300"),
            ("0007", "Red", "200-300"),
        ] {
            harness.register(number, tag, location);
        }
        harness
    }

    pub fn register(&self, number: &str, tag: &str, location: &str) {
        let mut context = self.state.context.lock().unwrap();
        context
            .submit(&EntryForm::new(number, tag, location))
            .unwrap();
    }
}
