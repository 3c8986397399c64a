//! Presentation read models for the entry list.

use crate::model::entry::{Entry, EntryId};

const CHECKED: &str = "\u{2611}";
const UNCHECKED: &str = "\u{2610}";

/// One row of the entry list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub id: EntryId,
    /// `☑` when viewed, `☐` otherwise.
    pub status: &'static str,
    pub description: String,
    /// `Yes` / `No`.
    pub pdf: &'static str,
    /// `Yes` / `No`.
    pub video: &'static str,
    pub notes: String,
    pub completed: bool,
}

impl EntryRow {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            status: if entry.completed { CHECKED } else { UNCHECKED },
            description: entry.description.clone(),
            pdf: yes_no(entry.has_pdf()),
            video: yes_no(entry.has_video()),
            notes: entry.notes.clone(),
            completed: entry.completed,
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
