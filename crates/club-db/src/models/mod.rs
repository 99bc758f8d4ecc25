//! Database models - SQLx-compatible structs for PostgreSQL tables

mod snapshot;
mod weekly_delta;

pub use snapshot::{MemberSnapshotModel, SnapshotModel};
pub use weekly_delta::{WeekModel, WeeklyDeltaModel};
