//! Weekly aggregation service
//!
//! Runs week resolution, diffing and badge assignment for a guild, and
//! optionally persists the result one member at a time. Also serves the
//! stored weeks back in report order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, instrument};

use club_core::analytics::{assign_badges, WeekWindow};
use club_core::entities::WeeklyDelta;
use club_core::value_objects::GuildId;

use super::context::ServiceContext;
use super::delta::DeltaService;
use super::error::ServiceResult;

/// A member row the store refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedUpsert {
    pub member_key: String,
    pub error: String,
}

/// Result of one aggregation run
#[derive(Debug, Clone)]
pub struct AggregationOutcome {
    pub guild_id: GuildId,
    pub week: WeekWindow,
    /// Whether rows were written to the store
    pub saved: bool,
    /// Persisted rows when saved, otherwise the in-memory cohort
    pub deltas: Vec<WeeklyDelta>,
    /// Members whose upsert failed; always empty when not saved
    pub failed: Vec<FailedUpsert>,
}

impl AggregationOutcome {
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Weekly aggregation service
pub struct WeeklyAggregationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WeeklyAggregationService<'a> {
    /// Create a new WeeklyAggregationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute badged deltas for the week enclosing `week_start` (current
    /// week when absent) and optionally upsert them.
    ///
    /// Store failures for individual members are logged and collected in
    /// [`AggregationOutcome::failed`]; the rest of the batch still runs.
    #[instrument(skip(self))]
    pub async fn compute_weekly_deltas(
        &self,
        guild_id: GuildId,
        week_start: Option<DateTime<Utc>>,
        save: bool,
    ) -> ServiceResult<AggregationOutcome> {
        let set = DeltaService::new(self.ctx).calculate(guild_id, week_start).await?;
        let week = set.week;

        let cohort: Vec<WeeklyDelta> = assign_badges(set.deltas, self.ctx.badge_rules())
            .into_iter()
            .map(|badged| WeeklyDelta::from_badged(week, badged))
            .collect();

        if !save {
            return Ok(AggregationOutcome {
                guild_id,
                week,
                saved: false,
                deltas: cohort,
                failed: Vec::new(),
            });
        }

        let repo = self.ctx.weekly_delta_repo();
        let mut persisted = Vec::with_capacity(cohort.len());
        let mut failed = Vec::new();

        for delta in &cohort {
            match repo.upsert(delta).await {
                Ok(stored) => persisted.push(stored),
                Err(e) => {
                    error!(
                        guild_id = %guild_id,
                        member_key = %delta.member_key,
                        error = %e,
                        "Failed to save weekly delta"
                    );
                    failed.push(FailedUpsert {
                        member_key: delta.member_key.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            guild_id = %guild_id,
            week_start = %week.start,
            saved = persisted.len(),
            failed = failed.len(),
            "Weekly deltas computed"
        );

        Ok(AggregationOutcome {
            guild_id,
            week,
            saved: true,
            deltas: persisted,
            failed,
        })
    }

    /// Stored rows for the week enclosing `week_start`, or the most recent
    /// stored week when absent. Empty when nothing is stored.
    #[instrument(skip(self))]
    pub async fn get_weekly_deltas(
        &self,
        guild_id: GuildId,
        week_start: Option<DateTime<Utc>>,
    ) -> ServiceResult<Vec<WeeklyDelta>> {
        let repo = self.ctx.weekly_delta_repo();

        let start = match week_start {
            Some(instant) => WeekWindow::containing(instant).start,
            None => match repo.latest_week_start(guild_id).await? {
                Some(start) => start,
                None => return Ok(Vec::new()),
            },
        };

        Ok(repo.find_by_week(guild_id, start).await?)
    }

    /// Weeks with stored rows, newest first
    #[instrument(skip(self))]
    pub async fn list_weeks(&self, guild_id: GuildId) -> ServiceResult<Vec<WeekWindow>> {
        Ok(self.ctx.weekly_delta_repo().list_weeks(guild_id).await?)
    }
}
