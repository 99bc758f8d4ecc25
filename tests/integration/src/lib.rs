//! Integration test utilities for weekly club analytics
//!
//! In-memory store implementations and snapshot fixtures for driving the
//! services end to end, plus helpers for PostgreSQL-backed runs.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
