//! Persistence adapters for the store.
//!
//! # Responsibility
//! - Define the load/save contract the service layer depends on.
//! - Keep file-format and file-system details out of the store.
//!
//! # Invariants
//! - `load` never fails: absent or malformed data yields `Store::default()`.
//! - `save` fully replaces prior content and reports every failure.

use crate::store::Store;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure while writing store state.
#[derive(Debug)]
pub enum PersistError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::Encode(err) => write!(f, "failed to encode store: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Load/save contract for full store snapshots.
pub trait StoreRepository {
    /// Reads the persisted store, falling back to defaults.
    fn load(&self) -> Store;
    /// Overwrites the persisted store with `store`.
    fn save(&mut self, store: &Store) -> PersistResult<()>;
}
