//! In-memory entry store and category registry.
//!
//! # Responsibility
//! - Hold the authoritative in-memory state (categories + entries).
//! - Enforce every business rule on add/edit/delete/toggle and category changes.
//! - Serve filtered, sorted list views and summaries.
//!
//! # Invariants
//! - Entry ids are unique within the store.
//! - Entries keep insertion order; list views sort stably on top of it.
//! - Removing a category never touches entries that reference it.
//! - Nothing here performs I/O; persistence is the caller's step.

use crate::model::entry::Entry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

mod categories;
mod entries;
mod error;

pub use categories::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use entries::Summary;
pub use error::{MissingRecord, StoreError, StoreResult};

/// Root aggregate of all categories and entries.
///
/// The serialized shape is the on-disk file format:
/// `{"categories": [...], "entries": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    categories: CategoryRegistry,
    entries: Vec<Entry>,
}

impl Default for Store {
    /// Default categories and no entries.
    fn default() -> Self {
        Self {
            categories: CategoryRegistry::with_defaults(),
            entries: Vec::new(),
        }
    }
}

impl Store {
    /// Creates an empty store with no categories.
    pub fn empty() -> Self {
        Self {
            categories: CategoryRegistry::default(),
            entries: Vec::new(),
        }
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Verifies invariants that deserialization alone cannot guarantee.
    ///
    /// Returns a human-readable reason for the first violation found.
    pub fn check_integrity(&self) -> Result<(), String> {
        if let Some(name) = self.categories.iter().find(|name| name.trim().is_empty()) {
            return Err(format!("blank category name `{name}`"));
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(&entry.id) {
                return Err(format!("duplicate entry id {}", entry.id));
            }
            entry
                .validate()
                .map_err(|err| format!("entry {}: {err}", entry.id))?;
        }
        Ok(())
    }
}
