//! FILENAME: core/engine/tests/common/mod.rs
//! Test harness and fixtures for engine integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use engine::{AppContext, ContainerRecord, EntryForm, NewContainer, RecordStore};

/// In-memory store that records every call it receives.
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<Vec<ContainerRecord>>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<&'static str>>,
    failure: RefCell<Option<String>>,
    failures_by_call: RefCell<Vec<(&'static str, String)>>,
}

impl MemoryStore {
    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    /// Make only calls named `call` fail with `message`.
    pub fn fail_on(&self, call: &'static str, message: &str) {
        self.failures_by_call
            .borrow_mut()
            .push((call, message.to_string()));
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
        self.failures_by_call.borrow_mut().clear();
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    fn enter(&self, call: &'static str) -> Result<(), String> {
        self.calls.borrow_mut().push(call);
        if let Some(message) = self.failure.borrow().as_ref() {
            return Err(message.clone());
        }
        match self
            .failures_by_call
            .borrow()
            .iter()
            .find(|(name, _)| *name == call)
        {
            Some((_, message)) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

impl RecordStore for MemoryStore {
    type Error = String;

    fn ensure_schema(&self) -> Result<(), String> {
        self.enter("ensure_schema")
    }

    fn create(&self, record: &NewContainer) -> Result<i64, String> {
        self.enter("create")?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.records.borrow_mut().push(ContainerRecord {
            id,
            number: record.number().to_string(),
            tag: record.tag().to_string(),
            location: record.location().to_string(),
        });
        Ok(id)
    }

    fn list(&self, filter: Option<&str>) -> Result<Vec<ContainerRecord>, String> {
        self.enter("list")?;
        let records = self.records.borrow();
        Ok(records
            .iter()
            .filter(|r| filter.map_or(true, |f| r.location.contains(f)))
            .cloned()
            .collect())
    }

    fn delete_by_number(&self, number: &str) -> Result<usize, String> {
        self.enter("delete_by_number")?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r.number != number);
        Ok(before - records.len())
    }
}

/// Test harness wrapping an application context over a `MemoryStore`.
pub struct TestHarness {
    pub context: AppContext<MemoryStore>,
}

impl TestHarness {
    /// Fresh context, schema ensured, initial list loaded, call log cleared.
    pub fn new() -> Self {
        let mut context = AppContext::new(MemoryStore::default());
        context.ensure_schema().unwrap();
        context.refresh().unwrap();
        context.store().clear_calls();
        TestHarness { context }
    }

    /// Harness with a few registered containers.
    pub fn with_sample_data() -> Self {
        let mut harness = Self::new();
        for (number, tag, location) in [
            ("4521", "Blue", "100-200"),
            ("0007", "Red", "200-300"),
            ("1234", "", "310-100"),
        ] {
            harness.register(number, tag, location);
        }
        harness.store().clear_calls();
        harness
    }

    pub fn store(&self) -> &MemoryStore {
        self.context.store()
    }

    pub fn register(&mut self, number: &str, tag: &str, location: &str) {
        self.context
            .submit(&EntryForm::new(number, tag, location))
            .expect("sample record should be valid");
    }

    /// Index of the first displayed row with this number.
    pub fn row_index(&self, number: &str) -> Option<usize> {
        self.context.rows().iter().position(|r| r.number == number)
    }
}
