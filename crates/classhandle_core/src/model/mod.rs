//! Domain model for study-material tracking.
//!
//! # Responsibility
//! - Define the typed records held by the store and written to disk.
//! - Own field-level validation and normalization rules.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId` that is never reused.
//! - Entries reference categories by copied name, not by handle.

pub mod entry;
pub mod filter;
pub mod validation;
