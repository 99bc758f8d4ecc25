//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the snapshot store and the
//! weekly delta store; the infrastructure layer provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics::WeekWindow;
use crate::entities::{Snapshot, WeeklyDelta};
use crate::error::DomainError;
use crate::value_objects::GuildId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Snapshot Repository
// ============================================================================

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Latest snapshots for a guild taken at or before `until`, newest first,
    /// each with all of its member rows. Returns at most `limit` snapshots.
    async fn find_latest(
        &self,
        guild_id: GuildId,
        until: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<Snapshot>>;
}

// ============================================================================
// Weekly Delta Repository
// ============================================================================

#[async_trait]
pub trait WeeklyDeltaRepository: Send + Sync {
    /// Insert or fully replace the row at `(guild_id, member_key, week_start)`,
    /// returning the stored row
    async fn upsert(&self, delta: &WeeklyDelta) -> RepoResult<WeeklyDelta>;

    /// All rows for a guild/week, ordered by power delta desc then current power desc
    async fn find_by_week(
        &self,
        guild_id: GuildId,
        week_start: DateTime<Utc>,
    ) -> RepoResult<Vec<WeeklyDelta>>;

    /// Start of the most recent week with any stored rows
    async fn latest_week_start(&self, guild_id: GuildId) -> RepoResult<Option<DateTime<Utc>>>;

    /// Distinct stored weeks, newest first
    async fn list_weeks(&self, guild_id: GuildId) -> RepoResult<Vec<WeekWindow>>;
}
