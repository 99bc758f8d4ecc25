//! Snapshot diffing - raw per-member deltas between two readings

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::{MemberSnapshot, Snapshot};
use crate::value_objects::{GuildId, Power};

use super::tier::{Tier, TierThresholds};

/// One member's change between the previous and current snapshot, before badges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDelta {
    pub guild_id: GuildId,
    pub member_key: String,
    pub display_name: String,
    pub rank: Option<String>,
    pub current_power: Power,
    pub current_sim_balance: Option<Power>,
    pub power_delta: Power,
    pub sim_delta: Option<Power>,
    pub tier: Tier,
}

/// Diff `current` against `previous`.
///
/// Every member of `current` yields exactly one record; members that only
/// appear in `previous` are dropped. A member with no previous reading starts
/// from zero power and has no sim delta.
pub fn diff_snapshots(
    current: &Snapshot,
    previous: Option<&Snapshot>,
    thresholds: &TierThresholds,
) -> Vec<MemberDelta> {
    let previous_members: HashMap<&str, &MemberSnapshot> = previous
        .map(|snapshot| {
            snapshot
                .members
                .iter()
                .map(|m| (m.member_key.as_str(), m))
                .collect()
        })
        .unwrap_or_default();

    current
        .members
        .iter()
        .map(|member| {
            let prior = previous_members.get(member.member_key.as_str()).copied();
            diff_member(current.guild_id, member, prior, thresholds)
        })
        .collect()
}

fn diff_member(
    guild_id: GuildId,
    current: &MemberSnapshot,
    previous: Option<&MemberSnapshot>,
    thresholds: &TierThresholds,
) -> MemberDelta {
    let previous_power = previous.map_or(Power::ZERO, |p| p.total_power);
    let sim_delta = match (current.sim_balance, previous.and_then(|p| p.sim_balance)) {
        (Some(now), Some(before)) => Some(now - before),
        _ => None,
    };

    MemberDelta {
        guild_id,
        member_key: current.member_key.clone(),
        display_name: current.display_name.clone(),
        rank: current.rank.clone(),
        current_power: current.total_power,
        current_sim_balance: current.sim_balance,
        power_delta: current.total_power - previous_power,
        sim_delta,
        tier: thresholds.classify(Some(current.total_power)),
    }
}
