//! FILENAME: core/engine/src/record.rs
//! PURPOSE: Container record types shared by the store, the command layer and the UI.

use serde::{Deserialize, Serialize};

/// A container record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRecord {
    /// Surrogate row id assigned by the store. Never shown in the list.
    pub id: i64,
    pub number: String,
    pub tag: String,
    pub location: String,
}

/// The columns displayed in the list view, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRow {
    pub number: String,
    pub tag: String,
    pub location: String,
}

impl From<ContainerRecord> for ContainerRow {
    fn from(record: ContainerRecord) -> Self {
        ContainerRow {
            number: record.number,
            tag: record.tag,
            location: record.location,
        }
    }
}

/// Raw input from the entry form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryForm {
    pub number: String,
    pub tag: String,
    pub location: String,
}

impl EntryForm {
    pub fn new(
        number: impl Into<String>,
        tag: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        EntryForm {
            number: number.into(),
            tag: tag.into(),
            location: location.into(),
        }
    }
}

/// A form that passed validation.
/// Only obtainable through `validation::validate_entry`, so a `Create`
/// request can never carry an unchecked number or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContainer {
    number: String,
    tag: String,
    location: String,
}

impl NewContainer {
    pub(crate) fn from_checked(form: &EntryForm) -> Self {
        NewContainer {
            number: form.number.clone(),
            tag: form.tag.clone(),
            location: form.location.clone(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
