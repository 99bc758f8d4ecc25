//! In-memory stores for service unit tests

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use club_core::analytics::WeekWindow;
use club_core::entities::{sort_for_report, Snapshot, WeeklyDelta};
use club_core::error::DomainError;
use club_core::traits::{RepoResult, SnapshotRepository, WeeklyDeltaRepository};
use club_core::value_objects::GuildId;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct MockSnapshotStore {
    pub snapshots: Vec<Snapshot>,
    pub fail: bool,
}

#[async_trait]
impl SnapshotRepository for MockSnapshotStore {
    async fn find_latest(
        &self,
        guild_id: GuildId,
        until: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<Snapshot>> {
        if self.fail {
            return Err(DomainError::DatabaseError("snapshot store down".to_string()));
        }
        let mut found: Vec<Snapshot> = self
            .snapshots
            .iter()
            .filter(|s| s.guild_id == guild_id && s.snapshot_date <= until)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.snapshot_date.cmp(&a.snapshot_date).then(b.id.cmp(&a.id)));
        found.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(found)
    }
}

#[derive(Default)]
pub struct MockDeltaStore {
    pub rows: Mutex<Vec<WeeklyDelta>>,
    pub failing_keys: HashSet<String>,
}

impl MockDeltaStore {
    pub fn failing_on(keys: &[&str]) -> Self {
        Self {
            failing_keys: keys.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl WeeklyDeltaRepository for MockDeltaStore {
    async fn upsert(&self, delta: &WeeklyDelta) -> RepoResult<WeeklyDelta> {
        if self.failing_keys.contains(&delta.member_key) {
            return Err(DomainError::DatabaseError(format!("write rejected for {}", delta.member_key)));
        }
        let mut stored = delta.clone();
        stored.updated_at = Some(Utc::now());
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.key() == delta.key()) {
            Some(existing) => {
                stored.created_at = existing.created_at;
                *existing = stored.clone();
            }
            None => {
                stored.created_at = stored.updated_at;
                rows.push(stored.clone());
            }
        }
        Ok(stored)
    }

    async fn find_by_week(
        &self,
        guild_id: GuildId,
        week_start: DateTime<Utc>,
    ) -> RepoResult<Vec<WeeklyDelta>> {
        let mut found: Vec<WeeklyDelta> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.guild_id == guild_id && r.week_start == week_start)
            .cloned()
            .collect();
        sort_for_report(&mut found);
        Ok(found)
    }

    async fn latest_week_start(&self, guild_id: GuildId) -> RepoResult<Option<DateTime<Utc>>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.guild_id == guild_id)
            .map(|r| r.week_start)
            .max())
    }

    async fn list_weeks(&self, guild_id: GuildId) -> RepoResult<Vec<WeekWindow>> {
        let mut weeks: Vec<WeekWindow> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.guild_id == guild_id)
            .map(WeeklyDelta::week)
            .collect();
        weeks.sort_by(|a, b| b.start.cmp(&a.start));
        weeks.dedup();
        Ok(weeks)
    }
}

pub fn context(snapshots: MockSnapshotStore, deltas: Arc<MockDeltaStore>) -> ServiceContext {
    ServiceContextBuilder::new()
        .snapshot_repo(Arc::new(snapshots))
        .weekly_delta_repo(deltas)
        .build()
        .unwrap()
}
