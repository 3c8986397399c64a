//! Category filter used by list and summary views.

use std::fmt::{Display, Formatter};

/// Sentinel filter label meaning "every category".
pub const ALL_CLASSES: &str = "All Classes";

/// Which entries a list or summary covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Category(String),
}

impl CategoryFilter {
    /// Parses a drop-down value; the sentinel or a blank value selects all.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_CLASSES {
            Self::All
        } else {
            Self::Category(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CLASSES,
            Self::Category(name) => name.as_str(),
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
