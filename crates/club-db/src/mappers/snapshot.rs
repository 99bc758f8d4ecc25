//! Snapshot entity <-> model mapper

use club_core::entities::{MemberSnapshot, Snapshot};
use club_core::value_objects::{GuildId, Power};

use crate::models::{MemberSnapshotModel, SnapshotModel};

impl From<MemberSnapshotModel> for MemberSnapshot {
    fn from(model: MemberSnapshotModel) -> Self {
        MemberSnapshot {
            member_key: model.member_key,
            display_name: model.display_name,
            rank: model.rank,
            total_power: Power::from(model.total_power),
            sim_balance: model.sim_balance.map(Power::from),
        }
    }
}

/// Convert a snapshot row and its member rows into a Snapshot entity
pub fn snapshot_with_members(model: SnapshotModel, members: Vec<MemberSnapshotModel>) -> Snapshot {
    Snapshot {
        id: model.id,
        guild_id: GuildId::new(model.guild_id),
        snapshot_date: model.snapshot_date,
        members: members.into_iter().map(MemberSnapshot::from).collect(),
    }
}
