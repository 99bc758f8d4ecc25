//! Test fixtures and data generators
//!
//! Provides reusable snapshots and instants for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use club_core::entities::{MemberSnapshot, Snapshot};
use club_core::value_objects::{GuildId, Power};

/// Counter for unique test data
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A guild id no other test in this process uses
pub fn unique_guild() -> GuildId {
    GuildId::new(Utc::now().timestamp_millis() * 1000 + unique_suffix())
}

/// Wednesday 2024-05-15 10:00 UTC; its week runs 2024-05-13 to 2024-05-19
pub fn wednesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// One member row: key, total power, optional sim balance
#[derive(Debug, Clone, Copy)]
pub struct Member<'a> {
    pub key: &'a str,
    pub power: i128,
    pub sim: Option<i128>,
}

impl<'a> Member<'a> {
    pub const fn new(key: &'a str, power: i128) -> Self {
        Self {
            key,
            power,
            sim: None,
        }
    }

    pub const fn with_sim(mut self, sim: i128) -> Self {
        self.sim = Some(sim);
        self
    }
}

/// Build a snapshot; display names are upper-cased keys
pub fn snapshot(id: i64, guild_id: GuildId, at: DateTime<Utc>, members: &[Member<'_>]) -> Snapshot {
    members.iter().fold(Snapshot::new(id, guild_id, at), |s, m| {
        let mut row = MemberSnapshot::new(m.key, m.key.to_uppercase(), Power::new(m.power));
        if let Some(sim) = m.sim {
            row = row.with_sim_balance(Power::new(sim));
        }
        s.with_member(row)
    })
}

/// Last week {m1: 5e9}, this week {m1: 12e9, m2: 5e7}
pub fn promotion_scenario(guild_id: GuildId) -> Vec<Snapshot> {
    vec![
        snapshot(
            unique_suffix(),
            guild_id,
            wednesday() - Duration::days(7),
            &[Member::new("m1", 5_000_000_000)],
        ),
        snapshot(
            unique_suffix(),
            guild_id,
            wednesday(),
            &[
                Member::new("m1", 12_000_000_000),
                Member::new("m2", 50_000_000),
            ],
        ),
    ]
}

/// A larger cohort exercising every badge rule
pub fn mixed_cohort(guild_id: GuildId) -> Vec<Snapshot> {
    let previous = [
        Member::new("steady", 1_000_000_000).with_sim(500),
        Member::new("climber", 100_000_000),
        Member::new("faller", 3_000_000_000),
        Member::new("slider", 800_000_000),
        Member::new("idle", 0),
        Member::new("leaver", 42),
    ];
    let current = [
        Member::new("steady", 1_020_000_000).with_sim(450),
        Member::new("climber", 400_000_000),
        Member::new("faller", 1_000_000_000),
        Member::new("slider", 700_000_000),
        Member::new("idle", 0),
        Member::new("rookie", 10_000),
        Member::new("titan", 20_000_000_000),
    ];
    vec![
        snapshot(unique_suffix(), guild_id, wednesday() - Duration::days(6), &previous),
        snapshot(unique_suffix(), guild_id, wednesday(), &current),
    ]
}
