//! # club-core
//!
//! Domain layer for weekly club analytics: snapshots, weekly deltas, tiers,
//! badges and the store traits. No dependencies on infrastructure
//! (database, runtime, configuration).

pub mod analytics;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use analytics::{
    all_badge_metadata, assign_badges, badge_metadata, diff_snapshots, Badge, BadgeMetadata,
    BadgeRules, BadgeSet, BadgedDelta, MemberDelta, Tier, TierThresholds, WeekWindow,
};
pub use entities::{sort_for_report, MemberSnapshot, Snapshot, WeeklyDelta};
pub use error::DomainError;
pub use traits::{RepoResult, SnapshotRepository, WeeklyDeltaRepository};
pub use value_objects::{GuildId, GuildIdParseError, Power, PowerParseError, PowerRangeError};
