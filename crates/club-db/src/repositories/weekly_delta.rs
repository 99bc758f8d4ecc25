//! PostgreSQL implementation of WeeklyDeltaRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use club_core::analytics::WeekWindow;
use club_core::entities::WeeklyDelta;
use club_core::traits::{RepoResult, WeeklyDeltaRepository};
use club_core::value_objects::GuildId;

use crate::mappers::WeeklyDeltaUpsert;
use crate::models::{WeekModel, WeeklyDeltaModel};

use super::error::map_db_error;

const SELECT_COLUMNS: &str = r#"
    guild_id, member_key, week_start, week_end, current_power, current_sim_balance,
    power_delta, sim_delta, tier, badges, display_name, rank, created_at, updated_at
"#;

/// PostgreSQL implementation of WeeklyDeltaRepository
#[derive(Clone)]
pub struct PgWeeklyDeltaRepository {
    pool: PgPool,
}

impl PgWeeklyDeltaRepository {
    /// Create a new PgWeeklyDeltaRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeeklyDeltaRepository for PgWeeklyDeltaRepository {
    // Full-row replace on the natural key. Concurrent writers for the same key
    // are not serialized; the last one to commit wins.
    #[instrument(skip(self, delta), fields(guild_id = %delta.guild_id, member_key = %delta.member_key))]
    async fn upsert(&self, delta: &WeeklyDelta) -> RepoResult<WeeklyDelta> {
        let row = WeeklyDeltaUpsert::new(delta)?;

        let query = format!(
            r#"
            INSERT INTO club_weekly_deltas (
                guild_id, member_key, week_start, week_end, current_power, current_sim_balance,
                power_delta, sim_delta, tier, badges, display_name, rank
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (guild_id, member_key, week_start) DO UPDATE SET
                week_end = EXCLUDED.week_end,
                current_power = EXCLUDED.current_power,
                current_sim_balance = EXCLUDED.current_sim_balance,
                power_delta = EXCLUDED.power_delta,
                sim_delta = EXCLUDED.sim_delta,
                tier = EXCLUDED.tier,
                badges = EXCLUDED.badges,
                display_name = EXCLUDED.display_name,
                rank = EXCLUDED.rank,
                updated_at = NOW()
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let model = sqlx::query_as::<_, WeeklyDeltaModel>(&query)
            .bind(row.guild_id)
            .bind(&row.member_key)
            .bind(delta.week_start)
            .bind(delta.week_end)
            .bind(row.current_power)
            .bind(row.current_sim_balance)
            .bind(row.power_delta)
            .bind(row.sim_delta)
            .bind(row.tier)
            .bind(&row.badges)
            .bind(&row.display_name)
            .bind(&row.rank)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        WeeklyDelta::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_week(
        &self,
        guild_id: GuildId,
        week_start: DateTime<Utc>,
    ) -> RepoResult<Vec<WeeklyDelta>> {
        let query = format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM club_weekly_deltas
            WHERE guild_id = $1 AND week_start = $2
            ORDER BY power_delta DESC, current_power DESC
            "#
        );

        let models = sqlx::query_as::<_, WeeklyDeltaModel>(&query)
            .bind(guild_id.into_inner())
            .bind(week_start)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        models.into_iter().map(WeeklyDelta::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn latest_week_start(&self, guild_id: GuildId) -> RepoResult<Option<DateTime<Utc>>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            SELECT week_start FROM club_weekly_deltas
            WHERE guild_id = $1
            ORDER BY week_start DESC
            LIMIT 1
            "#,
        )
        .bind(guild_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_weeks(&self, guild_id: GuildId) -> RepoResult<Vec<WeekWindow>> {
        let weeks = sqlx::query_as::<_, WeekModel>(
            r#"
            SELECT DISTINCT week_start, week_end
            FROM club_weekly_deltas
            WHERE guild_id = $1
            ORDER BY week_start DESC
            "#,
        )
        .bind(guild_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(weeks
            .into_iter()
            .map(|w| WeekWindow {
                start: w.week_start,
                end: w.week_end,
            })
            .collect())
    }
}
