//! Entry domain model.
//!
//! # Responsibility
//! - Define the persisted study-material record.
//! - Provide the editable-field draft used by add/edit commands.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - A stored `description` is never empty.
//! - Empty `pdf_path` / `video_link` mean "no resource".

use super::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, stable identifier for an entry.
///
/// New ids are UUID v4 strings, but any string read from disk is accepted
/// as-is; only uniqueness is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mints a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntryId {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value))
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One trackable study-material record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Category label, copied by value from the registry.
    pub category: String,
    /// Default sort key for list views.
    pub description: String,
    /// Local file path; empty when no PDF is attached.
    #[serde(default)]
    pub pdf_path: String,
    /// `http(s)` URL; empty when no video is attached.
    #[serde(default)]
    pub video_link: String,
    #[serde(default)]
    pub notes: String,
    /// Viewed/completed flag.
    #[serde(default)]
    pub completed: bool,
}

impl Entry {
    /// Builds a fresh, not-yet-completed entry from a normalized draft.
    pub(crate) fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        Self {
            id,
            category: draft.category,
            description: draft.description,
            pdf_path: draft.pdf_path,
            video_link: draft.video_link,
            notes: draft.notes,
            completed: false,
        }
    }

    /// Replaces every editable field, keeping `id` and `completed`.
    pub(crate) fn apply_draft(&mut self, draft: EntryDraft) {
        self.category = draft.category;
        self.description = draft.description;
        self.pdf_path = draft.pdf_path;
        self.video_link = draft.video_link;
        self.notes = draft.notes;
    }

    pub fn has_pdf(&self) -> bool {
        !self.pdf_path.is_empty()
    }

    pub fn has_video(&self) -> bool {
        !self.video_link.is_empty()
    }

    /// Checks the invariants a persisted entry must satisfy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Editable fields of an entry, as submitted by an add or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub category: String,
    pub description: String,
    pub pdf_path: String,
    pub video_link: String,
    pub notes: String,
}

impl EntryDraft {
    /// Creates a draft with the two required fields and no resources.
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_pdf(mut self, pdf_path: impl Into<String>) -> Self {
        self.pdf_path = pdf_path.into();
        self
    }

    pub fn with_video(mut self, video_link: impl Into<String>) -> Self {
        self.video_link = video_link.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Pre-fills a draft from an existing entry, as an edit form does.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            category: entry.category.clone(),
            description: entry.description.clone(),
            pdf_path: entry.pdf_path.clone(),
            video_link: entry.video_link.clone(),
            notes: entry.notes.clone(),
        }
    }

    /// Trims every field and enforces the required ones.
    ///
    /// # Errors
    /// - `EmptyCategory` when the trimmed category is empty.
    /// - `EmptyDescription` when the trimmed description is empty.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let draft = Self {
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            pdf_path: self.pdf_path.trim().to_string(),
            video_link: self.video_link.trim().to_string(),
            notes: self.notes.trim().to_string(),
        };

        if draft.category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if draft.description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryDraft, EntryId};
    use crate::model::validation::ValidationError;
    use uuid::Uuid;

    #[test]
    fn normalized_trims_all_fields() {
        let draft = EntryDraft::new("  Physics ", "\tOptics\n")
            .with_pdf(" /tmp/optics.pdf ")
            .with_video(" https://example.com/o ")
            .with_notes("  read chapter 3  ")
            .normalized()
            .expect("draft should be valid");

        assert_eq!(draft.category, "Physics");
        assert_eq!(draft.description, "Optics");
        assert_eq!(draft.pdf_path, "/tmp/optics.pdf");
        assert_eq!(draft.video_link, "https://example.com/o");
        assert_eq!(draft.notes, "read chapter 3");
    }

    #[test]
    fn normalized_rejects_blank_required_fields() {
        assert_eq!(
            EntryDraft::new(" ", "x").normalized(),
            Err(ValidationError::EmptyCategory)
        );
        assert_eq!(
            EntryDraft::new("Physics", "   ").normalized(),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn missing_optional_fields_deserialize_as_empty() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{id}","category":"Physics","description":"Waves"}}"#);
        let entry: Entry = serde_json::from_str(&json).expect("entry should parse");

        assert_eq!(entry.id.as_str(), id.to_string());
        assert!(!entry.has_pdf());
        assert!(!entry.has_video());
        assert!(entry.notes.is_empty());
        assert!(!entry.completed);
    }

    #[test]
    fn non_uuid_ids_are_kept_verbatim() {
        let json = r#"{"id":"entry-1","category":"Biology","description":"Cells"}"#;
        let entry: Entry = serde_json::from_str(json).expect("entry should parse");

        assert_eq!(entry.id, EntryId::from("entry-1"));
        assert_eq!(
            serde_json::to_value(&entry).unwrap()["id"],
            serde_json::json!("entry-1")
        );
    }

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let first = EntryId::generate();
        let second = EntryId::generate();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }
}
