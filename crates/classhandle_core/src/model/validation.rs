//! Field validation errors shared by entry and category inputs.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected user input for an entry or category field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entry category is empty after trimming.
    EmptyCategory,
    /// Entry description is empty or whitespace-only.
    EmptyDescription,
    /// Entry category does not name a registered category.
    UnknownCategory(String),
    /// Category name is empty after trimming.
    EmptyCategoryName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "category is required"),
            Self::EmptyDescription => write!(f, "description is required"),
            Self::UnknownCategory(name) => write!(f, "unknown category `{name}`"),
            Self::EmptyCategoryName => write!(f, "category name cannot be empty"),
        }
    }
}

impl Error for ValidationError {}
