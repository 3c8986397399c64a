//! Core domain logic for ClassHandle.
//! This crate is the single source of truth for store invariants; UIs only
//! issue commands and render the views it returns.

pub mod logging;
pub mod model;
pub mod repo;
pub mod resource;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::entry::{Entry, EntryDraft, EntryId};
pub use model::filter::{CategoryFilter, ALL_CLASSES};
pub use model::validation::ValidationError;
pub use repo::{JsonFileRepository, MemoryRepository, PersistError, PersistResult, StoreRepository};
pub use resource::{ResourceError, ResourceKind, ResourceTarget};
pub use service::class_service::ClassService;
pub use store::{CategoryRegistry, MissingRecord, Store, StoreError, StoreResult, Summary};
pub use view::EntryRow;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
