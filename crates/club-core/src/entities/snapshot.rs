//! Snapshot entity - a guild's membership readings at one point in time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GuildId, Power};

/// One captured reading of a guild. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: i64,
    pub guild_id: GuildId,
    pub snapshot_date: DateTime<Utc>,
    pub members: Vec<MemberSnapshot>,
}

/// One member's readings within a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSnapshot {
    /// Stable identity across snapshots, independent of name or rank changes
    pub member_key: String,
    pub display_name: String,
    /// Display only
    pub rank: Option<String>,
    pub total_power: Power,
    pub sim_balance: Option<Power>,
}

impl Snapshot {
    pub fn new(id: i64, guild_id: GuildId, snapshot_date: DateTime<Utc>) -> Self {
        Self {
            id,
            guild_id,
            snapshot_date,
            members: Vec::new(),
        }
    }

    /// Builder-style member append
    pub fn with_member(mut self, member: MemberSnapshot) -> Self {
        self.members.push(member);
        self
    }

    /// Find a member by key
    pub fn member(&self, member_key: &str) -> Option<&MemberSnapshot> {
        self.members.iter().find(|m| m.member_key == member_key)
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl MemberSnapshot {
    /// Create a member reading with no rank and no sim balance
    pub fn new(member_key: impl Into<String>, display_name: impl Into<String>, total_power: Power) -> Self {
        Self {
            member_key: member_key.into(),
            display_name: display_name.into(),
            rank: None,
            total_power,
            sim_balance: None,
        }
    }

    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    pub fn with_sim_balance(mut self, sim_balance: Power) -> Self {
        self.sim_balance = Some(sim_balance);
        self
    }
}
