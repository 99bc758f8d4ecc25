//! Entity to model mappers
//!
//! Conversions between domain entities (club-core) and database models.
//! - `From<Model> for Entity` / `TryFrom`: database rows to domain objects
//! - `*Upsert` structs: entity data prepared for writes

mod snapshot;
mod weekly_delta;

pub use snapshot::snapshot_with_members;
pub use weekly_delta::WeeklyDeltaUpsert;
