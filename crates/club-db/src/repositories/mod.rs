//! Repository implementations
//!
//! PostgreSQL implementations of the store traits defined in club-core.

mod error;
mod snapshot;
mod weekly_delta;

pub use snapshot::PgSnapshotRepository;
pub use weekly_delta::PgWeeklyDeltaRepository;
