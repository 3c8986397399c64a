//! In-memory persistence, for tests and throwaway sessions.

use super::{PersistResult, StoreRepository};
use crate::store::Store;

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    saved: Option<Store>,
    save_count: usize,
}

impl MemoryRepository {
    /// Starts with `store` as if it had been saved earlier.
    pub fn with_store(store: Store) -> Self {
        Self {
            saved: Some(store),
            save_count: 0,
        }
    }

    pub fn saved(&self) -> Option<&Store> {
        self.saved.as_ref()
    }

    /// Number of `save` calls since construction.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl StoreRepository for MemoryRepository {
    fn load(&self) -> Store {
        self.saved.clone().unwrap_or_default()
    }

    fn save(&mut self, store: &Store) -> PersistResult<()> {
        self.saved = Some(store.clone());
        self.save_count += 1;
        Ok(())
    }
}
