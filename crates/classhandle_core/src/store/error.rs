//! Store command errors.

use crate::model::entry::EntryId;
use crate::model::validation::ValidationError;
use crate::repo::PersistError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record a command referenced but the store does not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingRecord {
    Entry(EntryId),
    Category(String),
}

impl Display for MissingRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry(id) => write!(f, "entry {id}"),
            Self::Category(name) => write!(f, "category `{name}`"),
        }
    }
}

/// Failure of a store command, reported synchronously to the caller.
#[derive(Debug)]
pub enum StoreError {
    /// Required field missing or invalid.
    Validation(ValidationError),
    /// Category name already registered.
    Duplicate(String),
    /// Command referenced an unknown entry id or category name.
    NotFound(MissingRecord),
    /// State could not be written to disk.
    Persistence(PersistError),
}

impl StoreError {
    /// Stable snake_case label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Duplicate(_) => "duplicate",
            Self::NotFound(_) => "not_found",
            Self::Persistence(_) => "persistence",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Duplicate(name) => write!(f, "category `{name}` already exists"),
            Self::NotFound(record) => write!(f, "{record} not found"),
            Self::Persistence(err) => write!(f, "failed to save data: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
            Self::Duplicate(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistError> for StoreError {
    fn from(value: PersistError) -> Self {
        Self::Persistence(value)
    }
}
