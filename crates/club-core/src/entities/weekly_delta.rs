//! WeeklyDelta entity - one member's computed result for one guild/week
//!
//! Keyed by `(guild_id, member_key, week_start)`. Rows are always replaced
//! wholesale, never patched.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use crate::analytics::{Badge, BadgeSet, BadgedDelta, Tier, WeekWindow};
use crate::value_objects::{GuildId, Power};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyDelta {
    pub guild_id: GuildId,
    pub member_key: String,
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub current_power: Power,
    pub current_sim_balance: Option<Power>,
    pub power_delta: Power,
    pub sim_delta: Option<Power>,
    pub tier: Tier,
    pub badges: BadgeSet,
    pub display_name: String,
    pub rank: Option<String>,
    /// Set by the store on first insert
    pub created_at: Option<DateTime<Utc>>,
    /// Set by the store on every write
    pub updated_at: Option<DateTime<Utc>>,
}

impl WeeklyDelta {
    /// Attach a badged member delta to its week
    pub fn from_badged(week: WeekWindow, badged: BadgedDelta) -> Self {
        let BadgedDelta { delta, badges } = badged;
        Self {
            guild_id: delta.guild_id,
            member_key: delta.member_key,
            week_start: week.start,
            week_end: week.end,
            current_power: delta.current_power,
            current_sim_balance: delta.current_sim_balance,
            power_delta: delta.power_delta,
            sim_delta: delta.sim_delta,
            tier: delta.tier,
            badges,
            display_name: delta.display_name,
            rank: delta.rank,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn week(&self) -> WeekWindow {
        WeekWindow {
            start: self.week_start,
            end: self.week_end,
        }
    }

    /// Natural key
    pub fn key(&self) -> (GuildId, &str, DateTime<Utc>) {
        (self.guild_id, self.member_key.as_str(), self.week_start)
    }

    #[inline]
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }

    /// Badge ids in canonical order, as stored
    pub fn badge_ids(&self) -> Vec<String> {
        self.badges.iter().map(|b| b.id().to_string()).collect()
    }

    /// Report order: biggest gain first, then most powerful
    pub fn report_order(a: &Self, b: &Self) -> Ordering {
        b.power_delta
            .cmp(&a.power_delta)
            .then_with(|| b.current_power.cmp(&a.current_power))
    }
}

/// Sort rows into report order in place
pub fn sort_for_report(rows: &mut [WeeklyDelta]) {
    rows.sort_by(WeeklyDelta::report_order);
}
