//! PostgreSQL implementation of SnapshotRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use club_core::entities::Snapshot;
use club_core::error::DomainError;
use club_core::traits::{RepoResult, SnapshotRepository};
use club_core::value_objects::GuildId;

use crate::mappers::snapshot_with_members;
use crate::models::{MemberSnapshotModel, SnapshotModel};

use super::error::map_db_error;

/// PostgreSQL implementation of SnapshotRepository
#[derive(Clone)]
pub struct PgSnapshotRepository {
    pool: PgPool,
}

impl PgSnapshotRepository {
    /// Create a new PgSnapshotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load member rows for a snapshot in capture order
    async fn load_members(&self, snapshot_id: i64) -> Result<Vec<MemberSnapshotModel>, DomainError> {
        sqlx::query_as::<_, MemberSnapshotModel>(
            r#"
            SELECT snapshot_id, member_key, display_name, rank, total_power, sim_balance
            FROM club_member_snapshots
            WHERE snapshot_id = $1
            ORDER BY id
            "#,
        )
        .bind(snapshot_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl SnapshotRepository for PgSnapshotRepository {
    #[instrument(skip(self))]
    async fn find_latest(
        &self,
        guild_id: GuildId,
        until: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<Snapshot>> {
        let models = sqlx::query_as::<_, SnapshotModel>(
            r#"
            SELECT id, guild_id, snapshot_date
            FROM club_snapshots
            WHERE guild_id = $1 AND snapshot_date <= $2
            ORDER BY snapshot_date DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(until)
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut snapshots = Vec::with_capacity(models.len());
        for model in models {
            let members = self.load_members(model.id).await?;
            debug!(snapshot_id = model.id, members = members.len(), "Loaded snapshot");
            snapshots.push(snapshot_with_members(model, members));
        }

        Ok(snapshots)
    }
}
