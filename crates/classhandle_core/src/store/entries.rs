//! Entry commands and queries on [`Store`].
//!
//! # Invariants
//! - Add/update trim every field before storing.
//! - Update replaces all editable fields and preserves `id` + `completed`.
//! - List order is `description ASC` (byte-wise), stable for equal keys.

use super::error::{MissingRecord, StoreError, StoreResult};
use super::Store;
use crate::model::entry::{Entry, EntryDraft, EntryId};
use crate::model::filter::CategoryFilter;
use crate::model::validation::ValidationError;

/// Completion counts over one filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub filter: CategoryFilter,
    pub total: usize,
    pub completed: usize,
}

impl Summary {
    /// Status-bar text for the current view.
    pub fn display_line(&self) -> String {
        format!(
            "Displaying: {}   |   Total Items: {}   |   \u{2611} Viewed: {}",
            self.filter, self.total, self.completed
        )
    }
}

impl Store {
    /// Adds an entry with a fresh id and `completed = false`.
    ///
    /// # Errors
    /// - `Validation` when category/description are blank or the category is
    ///   not registered.
    pub fn add_entry(&mut self, draft: EntryDraft) -> StoreResult<Entry> {
        let draft = draft.normalized()?;
        if !self.categories.contains(&draft.category) {
            return Err(ValidationError::UnknownCategory(draft.category).into());
        }

        let entry = Entry::from_draft(self.fresh_id(), draft);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Replaces all editable fields of an existing entry.
    ///
    /// The category must be registered, or equal the entry's current one so
    /// entries left behind by a removed category stay editable.
    ///
    /// # Errors
    /// - `NotFound` when `id` is unknown.
    /// - `Validation` under the same rules as [`Store::add_entry`].
    pub fn update_entry(&mut self, id: &EntryId, draft: EntryDraft) -> StoreResult<Entry> {
        let index = self.position(id)?;
        let draft = draft.normalized()?;
        let current = &self.entries[index];
        if draft.category != current.category && !self.categories.contains(&draft.category) {
            return Err(ValidationError::UnknownCategory(draft.category).into());
        }

        let entry = &mut self.entries[index];
        entry.apply_draft(draft);
        Ok(entry.clone())
    }

    /// Removes an entry and returns it.
    pub fn delete_entry(&mut self, id: &EntryId) -> StoreResult<Entry> {
        let index = self.position(id)?;
        Ok(self.entries.remove(index))
    }

    /// Flips the completed flag and returns the updated entry.
    pub fn toggle_completed(&mut self, id: &EntryId) -> StoreResult<Entry> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        entry.completed = !entry.completed;
        Ok(entry.clone())
    }

    pub fn get_entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Entries matching `filter`, sorted by description.
    pub fn list_entries(&self, filter: &CategoryFilter) -> Vec<&Entry> {
        let mut entries = self
            .entries
            .iter()
            .filter(|entry| filter.matches(&entry.category))
            .collect::<Vec<_>>();
        entries.sort_by(|left, right| left.description.cmp(&right.description));
        entries
    }

    /// Counts over the same set `list_entries` returns.
    pub fn summarize(&self, filter: &CategoryFilter) -> Summary {
        let (total, completed) = self
            .entries
            .iter()
            .filter(|entry| filter.matches(&entry.category))
            .fold((0, 0), |(total, completed), entry| {
                (total + 1, completed + usize::from(entry.completed))
            });
        Summary {
            filter: filter.clone(),
            total,
            completed,
        }
    }

    fn position(&self, id: &EntryId) -> StoreResult<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| StoreError::NotFound(MissingRecord::Entry(id.clone())))
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if self.get_entry(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Summary;
    use crate::model::entry::EntryDraft;
    use crate::model::filter::CategoryFilter;
    use crate::model::validation::ValidationError;
    use crate::store::{Store, StoreError};

    #[test]
    fn add_rejects_unregistered_category() {
        let mut store = Store::default();
        let err = store
            .add_entry(EntryDraft::new("Biology", "Cells"))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::UnknownCategory(name)) if name == "Biology"
        ));
        assert_eq!(store.entry_count(), 0);
    }

    #[test]
    fn list_sort_is_case_sensitive_and_stable() {
        let mut store = Store::default();
        let first = store.add_entry(EntryDraft::new("Physics", "alpha")).unwrap();
        let upper = store.add_entry(EntryDraft::new("Physics", "Zeta")).unwrap();
        let second = store.add_entry(EntryDraft::new("Physics", "alpha")).unwrap();

        let ids = store
            .list_entries(&CategoryFilter::All)
            .into_iter()
            .map(|entry| entry.id.clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![upper.id, first.id, second.id]);
    }

    #[test]
    fn update_keeps_dangling_category_of_the_same_entry() {
        let mut store = Store::default();
        let entry = store.add_entry(EntryDraft::new("Physics", "Optics")).unwrap();
        store.remove_category("Physics").unwrap();

        let updated = store
            .update_entry(&entry.id, EntryDraft::new("Physics", "Geometric optics"))
            .unwrap();
        assert_eq!(updated.category, "Physics");
        assert_eq!(updated.description, "Geometric optics");

        let err = store
            .update_entry(&entry.id, EntryDraft::new("Astronomy", "Stars"))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn summary_display_line_names_filter() {
        let summary = Summary {
            filter: CategoryFilter::All,
            total: 4,
            completed: 1,
        };
        assert_eq!(
            summary.display_line(),
            "Displaying: All Classes   |   Total Items: 4   |   \u{2611} Viewed: 1"
        );
    }
}
