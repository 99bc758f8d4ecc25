//! WeeklyDelta entity <-> model mapper

use club_core::analytics::{Badge, BadgeSet, Tier};
use club_core::entities::WeeklyDelta;
use club_core::error::DomainError;
use club_core::value_objects::{GuildId, Power};
use tracing::warn;

use crate::models::WeeklyDeltaModel;

/// Convert a stored row to a WeeklyDelta entity.
///
/// Fails only on an unrecognised tier; unrecognised badge ids are skipped.
impl TryFrom<WeeklyDeltaModel> for WeeklyDelta {
    type Error = DomainError;

    fn try_from(model: WeeklyDeltaModel) -> Result<Self, Self::Error> {
        let tier: Tier = model.tier.parse()?;
        let badges: BadgeSet = model
            .badges
            .iter()
            .filter_map(|id| {
                let badge = Badge::from_id(id);
                if badge.is_none() {
                    warn!(member_key = %model.member_key, badge = %id, "Skipping unknown stored badge");
                }
                badge
            })
            .collect();

        Ok(WeeklyDelta {
            guild_id: GuildId::new(model.guild_id),
            member_key: model.member_key,
            week_start: model.week_start,
            week_end: model.week_end,
            current_power: Power::from(model.current_power),
            current_sim_balance: model.current_sim_balance.map(Power::from),
            power_delta: Power::from(model.power_delta),
            sim_delta: model.sim_delta.map(Power::from),
            tier,
            badges,
            display_name: model.display_name,
            rank: model.rank,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        })
    }
}

/// Column values for an upsert, narrowed to BIGINT
#[derive(Debug)]
pub struct WeeklyDeltaUpsert {
    pub guild_id: i64,
    pub member_key: String,
    pub current_power: i64,
    pub current_sim_balance: Option<i64>,
    pub power_delta: i64,
    pub sim_delta: Option<i64>,
    pub tier: &'static str,
    pub badges: Vec<String>,
    pub display_name: String,
    pub rank: Option<String>,
}

impl WeeklyDeltaUpsert {
    /// Fails when any amount does not fit in a BIGINT column
    pub fn new(delta: &WeeklyDelta) -> Result<Self, DomainError> {
        Ok(Self {
            guild_id: delta.guild_id.into_inner(),
            member_key: delta.member_key.clone(),
            current_power: narrow("current_power", delta.current_power)?,
            current_sim_balance: delta
                .current_sim_balance
                .map(|v| narrow("current_sim_balance", v))
                .transpose()?,
            power_delta: narrow("power_delta", delta.power_delta)?,
            sim_delta: delta.sim_delta.map(|v| narrow("sim_delta", v)).transpose()?,
            tier: delta.tier.as_str(),
            badges: delta.badge_ids(),
            display_name: delta.display_name.clone(),
            rank: delta.rank.clone(),
        })
    }
}

fn narrow(field: &'static str, value: Power) -> Result<i64, DomainError> {
    value.to_i64().map_err(|_| DomainError::ValueOutOfRange {
        field,
        value: value.to_string(),
    })
}
