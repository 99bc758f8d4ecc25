//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use club_core::analytics::{BadgeMetadata, WeekWindow};
use club_core::entities::WeeklyDelta;
use club_core::value_objects::{GuildId, Power};

use crate::services::{AggregationOutcome, FailedUpsert};

use super::responses::{
    BadgeMetadataResponse, ComputeSummaryResponse, FailedMemberResponse, WeekResponse,
    WeeklyDeltaResponse, WeeklyReportResponse,
};

fn amount(value: Option<Power>) -> Option<String> {
    value.map(|p| p.to_string())
}

// ============================================================================
// Weekly Mappers
// ============================================================================

impl From<&WeeklyDelta> for WeeklyDeltaResponse {
    fn from(row: &WeeklyDelta) -> Self {
        Self {
            guild_id: row.guild_id.to_string(),
            member_key: row.member_key.clone(),
            display_name: row.display_name.clone(),
            rank: row.rank.clone(),
            week_start: row.week_start,
            week_end: row.week_end,
            current_power: row.current_power.to_string(),
            current_sim_balance: amount(row.current_sim_balance),
            power_delta: row.power_delta.to_string(),
            sim_delta: amount(row.sim_delta),
            tier: row.tier.to_string(),
            badges: row.badge_ids(),
            updated_at: row.updated_at,
        }
    }
}

impl From<WeekWindow> for WeekResponse {
    fn from(week: WeekWindow) -> Self {
        Self {
            week_start: week.start,
            week_end: week.end,
        }
    }
}

impl WeeklyReportResponse {
    /// Build from rows already in report order
    pub fn new(guild_id: GuildId, rows: &[WeeklyDelta]) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            week: rows.first().map(|r| WeekResponse::from(r.week())),
            count: rows.len(),
            deltas: rows.iter().map(WeeklyDeltaResponse::from).collect(),
        }
    }
}

impl From<&FailedUpsert> for FailedMemberResponse {
    fn from(failed: &FailedUpsert) -> Self {
        Self {
            member_key: failed.member_key.clone(),
            error: failed.error.clone(),
        }
    }
}

impl From<&AggregationOutcome> for ComputeSummaryResponse {
    fn from(outcome: &AggregationOutcome) -> Self {
        Self {
            guild_id: outcome.guild_id.to_string(),
            week_start: outcome.week.start,
            week_end: outcome.week.end,
            saved: outcome.saved,
            computed: outcome.deltas.len(),
            failed: outcome.failed.iter().map(FailedMemberResponse::from).collect(),
            deltas: outcome.deltas.iter().map(WeeklyDeltaResponse::from).collect(),
        }
    }
}

// ============================================================================
// Badge Mappers
// ============================================================================

impl From<&BadgeMetadata> for BadgeMetadataResponse {
    fn from(meta: &BadgeMetadata) -> Self {
        Self {
            id: meta.id.to_string(),
            label: meta.label.to_string(),
            description: meta.description.to_string(),
            color: meta.color.to_string(),
            emoji: meta.emoji.to_string(),
        }
    }
}
