//! Auto-flushing command facade over [`Store`] and a [`StoreRepository`].
//!
//! # Responsibility
//! - Run each mutating command, then persist the full store before returning.
//! - Expose read-side queries for list, summary and category views.
//!
//! # Invariants
//! - Every successful mutation has been saved when the call returns.
//! - A failed command (including a failed save) leaves memory as it was.
//! - Mutations take `&mut self`, so at most one is ever in flight.

use crate::model::entry::{Entry, EntryDraft, EntryId};
use crate::model::filter::CategoryFilter;
use crate::repo::StoreRepository;
use crate::store::{Store, StoreResult, Summary};
use crate::view::EntryRow;
use log::{error, info, warn};

/// Command surface used by presentation layers.
pub struct ClassService<R: StoreRepository> {
    store: Store,
    repo: R,
}

impl<R: StoreRepository> ClassService<R> {
    /// Loads the persisted store (or defaults) through `repo`.
    pub fn open(repo: R) -> Self {
        let store = repo.load();
        info!(
            "event=service_open module=service status=ok categories={} entries={}",
            store.categories().len(),
            store.entry_count()
        );
        Self { store, repo }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add_entry(&mut self, draft: EntryDraft) -> StoreResult<Entry> {
        self.commit("entry_add", |store| store.add_entry(draft))
    }

    pub fn update_entry(&mut self, id: &EntryId, draft: EntryDraft) -> StoreResult<Entry> {
        self.commit("entry_update", |store| store.update_entry(id, draft))
    }

    pub fn delete_entry(&mut self, id: &EntryId) -> StoreResult<Entry> {
        self.commit("entry_delete", |store| store.delete_entry(id))
    }

    pub fn toggle_completed(&mut self, id: &EntryId) -> StoreResult<Entry> {
        self.commit("entry_toggle", |store| store.toggle_completed(id))
    }

    pub fn add_category(&mut self, name: &str) -> StoreResult<String> {
        self.commit("category_add", |store| store.add_category(name))
    }

    pub fn remove_category(&mut self, name: &str) -> StoreResult<()> {
        self.commit("category_remove", |store| store.remove_category(name))
    }

    pub fn get_entry(&self, id: &EntryId) -> Option<&Entry> {
        self.store.get_entry(id)
    }

    pub fn list_entries(&self, filter: &CategoryFilter) -> Vec<&Entry> {
        self.store.list_entries(filter)
    }

    /// List-view rows for `filter`, in display order.
    pub fn entry_rows(&self, filter: &CategoryFilter) -> Vec<EntryRow> {
        self.store
            .list_entries(filter)
            .into_iter()
            .map(EntryRow::from_entry)
            .collect()
    }

    pub fn summarize(&self, filter: &CategoryFilter) -> Summary {
        self.store.summarize(filter)
    }

    pub fn list_categories(&self) -> Vec<String> {
        self.store.list_categories()
    }

    pub fn filter_options(&self) -> Vec<String> {
        self.store.filter_options()
    }

    fn commit<T>(
        &mut self,
        command: &'static str,
        op: impl FnOnce(&mut Store) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let snapshot = self.store.clone();

        let value = match op(&mut self.store) {
            Ok(value) => value,
            Err(err) => {
                self.store = snapshot;
                warn!(
                    "event={} module=service status=rejected error_kind={}",
                    command,
                    err.kind()
                );
                return Err(err);
            }
        };

        if let Err(err) = self.repo.save(&self.store) {
            self.store = snapshot;
            error!(
                "event={} module=service status=error error_kind=persistence rolled_back=true",
                command
            );
            return Err(err.into());
        }

        info!(
            "event={} module=service status=ok entries={}",
            command,
            self.store.entry_count()
        );
        Ok(value)
    }
}
