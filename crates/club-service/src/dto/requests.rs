//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Guild ids arrive as strings and weeks as ISO dates or RFC 3339 timestamps.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use validator::Validate;

use club_core::error::DomainError;
use club_core::value_objects::GuildId;

use crate::services::{ServiceError, ServiceResult};

fn default_save() -> bool {
    true
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp
pub fn parse_week_start(value: &str) -> ServiceResult<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ServiceError::validation(format!("Invalid week start: {value}")))
}

fn parse_guild_id(value: &str) -> ServiceResult<GuildId> {
    GuildId::parse(value).map_err(|_| DomainError::InvalidGuildId(value.to_string()).into())
}

// ============================================================================
// Weekly Requests
// ============================================================================

/// Compute (and optionally store) one guild's weekly deltas
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ComputeWeeklyRequest {
    #[validate(length(min = 1, max = 20, message = "Guild id must be 1-20 characters"))]
    pub guild_id: String,

    /// Any instant inside the target week; current week when absent
    #[validate(length(min = 10, max = 35, message = "Week start must be an ISO date or timestamp"))]
    pub week_start: Option<String>,

    #[serde(default = "default_save")]
    pub save: bool,
}

/// Validated form of [`ComputeWeeklyRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeWeeklyParams {
    pub guild_id: GuildId,
    pub week_start: Option<DateTime<Utc>>,
    pub save: bool,
}

impl ComputeWeeklyRequest {
    /// Validate field shapes, then parse ids and dates
    pub fn parse(&self) -> ServiceResult<ComputeWeeklyParams> {
        self.validate()?;
        Ok(ComputeWeeklyParams {
            guild_id: parse_guild_id(&self.guild_id)?,
            week_start: self.week_start.as_deref().map(parse_week_start).transpose()?,
            save: self.save,
        })
    }
}

/// Read stored deltas for a week, or the latest stored week
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeeklyDeltasQuery {
    #[validate(length(min = 1, max = 20, message = "Guild id must be 1-20 characters"))]
    pub guild_id: String,

    #[validate(length(min = 10, max = 35, message = "Week start must be an ISO date or timestamp"))]
    pub week_start: Option<String>,
}

impl WeeklyDeltasQuery {
    pub fn parse(&self) -> ServiceResult<(GuildId, Option<DateTime<Utc>>)> {
        self.validate()?;
        Ok((
            parse_guild_id(&self.guild_id)?,
            self.week_start.as_deref().map(parse_week_start).transpose()?,
        ))
    }
}
