//! Use-case services.
//!
//! # Responsibility
//! - Pair the in-memory store with a persistence adapter.
//! - Give presentation code one synchronous command surface.

pub mod class_service;
