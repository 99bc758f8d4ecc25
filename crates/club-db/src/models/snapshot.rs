//! Snapshot database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for club_snapshots table
#[derive(Debug, Clone, FromRow)]
pub struct SnapshotModel {
    pub id: i64,
    pub guild_id: i64,
    pub snapshot_date: DateTime<Utc>,
}

/// Database model for club_member_snapshots table
#[derive(Debug, Clone, FromRow)]
pub struct MemberSnapshotModel {
    pub snapshot_id: i64,
    pub member_key: String,
    pub display_name: String,
    pub rank: Option<String>,
    pub total_power: i64,
    pub sim_balance: Option<i64>,
}
