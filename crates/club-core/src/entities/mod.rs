//! Domain entities - core business objects

mod snapshot;
mod weekly_delta;

pub use snapshot::{MemberSnapshot, Snapshot};
pub use weekly_delta::{sort_for_report, WeeklyDelta};
