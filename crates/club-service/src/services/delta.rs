//! Delta service
//!
//! Loads the two newest snapshots at or before a week's end and diffs them.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use club_core::analytics::{diff_snapshots, MemberDelta, WeekWindow};
use club_core::value_objects::GuildId;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Current plus previous
const SNAPSHOTS_PER_DIFF: i64 = 2;

/// Raw per-member deltas for one week, before badges
#[derive(Debug, Clone)]
pub struct DeltaSet {
    pub week: WeekWindow,
    pub deltas: Vec<MemberDelta>,
}

impl DeltaSet {
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

/// Delta service
pub struct DeltaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeltaService<'a> {
    /// Create a new DeltaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Deltas for the week enclosing `reference`, or the current week
    pub async fn calculate(
        &self,
        guild_id: GuildId,
        reference: Option<DateTime<Utc>>,
    ) -> ServiceResult<DeltaSet> {
        let week = reference.map_or_else(WeekWindow::current, WeekWindow::containing);
        self.calculate_for_week(guild_id, week).await
    }

    /// Deltas for an already-resolved week
    #[instrument(skip(self), fields(week_start = %week.start))]
    pub async fn calculate_for_week(
        &self,
        guild_id: GuildId,
        week: WeekWindow,
    ) -> ServiceResult<DeltaSet> {
        let snapshots = self
            .ctx
            .snapshot_repo()
            .find_latest(guild_id, week.end, SNAPSHOTS_PER_DIFF)
            .await?;

        let mut snapshots = snapshots.into_iter();
        let Some(current) = snapshots.next() else {
            info!(guild_id = %guild_id, "No snapshots on or before week end");
            return Ok(DeltaSet {
                week,
                deltas: Vec::new(),
            });
        };
        let previous = snapshots.next();

        debug!(
            current_snapshot = current.id,
            previous_snapshot = previous.as_ref().map(|s| s.id),
            "Diffing snapshots"
        );

        let deltas = diff_snapshots(&current, previous.as_ref(), self.ctx.tier_thresholds());
        Ok(DeltaSet { week, deltas })
    }
}
