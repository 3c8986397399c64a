//! Category registry.
//!
//! # Invariants
//! - Names are unique by exact string match and stored trimmed.
//! - Iteration order is always sorted.

use super::error::{MissingRecord, StoreError, StoreResult};
use super::Store;
use crate::model::filter::ALL_CLASSES;
use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Categories present when no persisted data exists.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["Physics", "Chemistry"];

/// Set of valid category names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    names: BTreeSet<String>,
}

impl CategoryRegistry {
    pub fn with_defaults() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Registers a new category and returns the stored (trimmed) name.
    ///
    /// # Errors
    /// - `Validation(EmptyCategoryName)` when the name is blank.
    /// - `Duplicate` when the name is already registered.
    pub fn add(&mut self, name: &str) -> StoreResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName.into());
        }
        if !self.names.insert(name.to_string()) {
            return Err(StoreError::Duplicate(name.to_string()));
        }
        Ok(name.to_string())
    }

    /// Unregisters a category.
    ///
    /// # Errors
    /// - `NotFound` when the name is not registered.
    pub fn remove(&mut self, name: &str) -> StoreResult<()> {
        let name = name.trim();
        if self.names.remove(name) {
            Ok(())
        } else {
            Err(StoreError::NotFound(MissingRecord::Category(
                name.to_string(),
            )))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Store {
    /// See [`CategoryRegistry::add`].
    pub fn add_category(&mut self, name: &str) -> StoreResult<String> {
        self.categories.add(name)
    }

    /// Removes a category from the registry only; entries keep their label.
    pub fn remove_category(&mut self, name: &str) -> StoreResult<()> {
        self.categories.remove(name)
    }

    /// Category names, sorted.
    pub fn list_categories(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }

    /// Filter drop-down values: the "All Classes" sentinel, then categories.
    pub fn filter_options(&self) -> Vec<String> {
        std::iter::once(ALL_CLASSES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }
}
