//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Guild ids and every power/currency amount are serialized as decimal
//! strings so JavaScript consumers never lose precision.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// Weekly Responses
// ============================================================================

/// One stored or computed weekly row
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyDeltaResponse {
    pub guild_id: String,
    pub member_key: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub current_power: String,
    pub current_sim_balance: Option<String>,
    pub power_delta: String,
    pub sim_delta: Option<String>,
    pub tier: String,
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A stored reporting week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekResponse {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
}

/// Stored rows for one guild/week
#[derive(Debug, Serialize)]
pub struct WeeklyReportResponse {
    pub guild_id: String,
    /// Absent when nothing is stored
    pub week: Option<WeekResponse>,
    pub count: usize,
    pub deltas: Vec<WeeklyDeltaResponse>,
}

/// A member whose row could not be stored
#[derive(Debug, Clone, Serialize)]
pub struct FailedMemberResponse {
    pub member_key: String,
    pub error: String,
}

/// Result of a compute run
#[derive(Debug, Serialize)]
pub struct ComputeSummaryResponse {
    pub guild_id: String,
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub saved: bool,
    pub computed: usize,
    pub failed: Vec<FailedMemberResponse>,
    pub deltas: Vec<WeeklyDeltaResponse>,
}

// ============================================================================
// Badge Responses
// ============================================================================

/// Display metadata for a badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeMetadataResponse {
    pub id: String,
    pub label: String,
    pub description: String,
    pub color: String,
    pub emoji: String,
}
