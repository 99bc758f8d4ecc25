//! Weekly delta database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for club_weekly_deltas table
#[derive(Debug, Clone, FromRow)]
pub struct WeeklyDeltaModel {
    pub guild_id: i64,
    pub member_key: String,
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub current_power: i64,
    pub current_sim_balance: Option<i64>,
    pub power_delta: i64,
    pub sim_delta: Option<i64>,
    pub tier: String,
    pub badges: Vec<String>,
    pub display_name: String,
    pub rank: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Distinct week row for week listings
#[derive(Debug, Clone, FromRow)]
pub struct WeekModel {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
}
