//! Badge assignment over a whole guild/week cohort
//!
//! Ranking badges are relative to the full cohort, so this runs in two
//! phases: build every ordering first, then annotate members. It must be
//! given the complete cohort, never a subset.

use serde::Serialize;

use super::badge::{Badge, BadgeSet};
use super::delta::MemberDelta;
use super::tier::Tier;

/// Tunable badge rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRules {
    /// How many members each ranking badge goes to
    pub ranking_size: usize,
    /// `rising_star` needs a gain strictly above this share of current power
    pub rising_star_percent: u32,
    /// `consistent` needs an absolute change at most this share of current power
    pub consistent_percent: u32,
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self {
            ranking_size: 3,
            rising_star_percent: 50,
            consistent_percent: 5,
        }
    }
}

/// A member delta with its badges attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgedDelta {
    #[serde(flatten)]
    pub delta: MemberDelta,
    pub badges: BadgeSet,
}

impl BadgedDelta {
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

/// Annotate every member of the cohort with the badges they earned.
///
/// Output order matches input order.
pub fn assign_badges(cohort: Vec<MemberDelta>, rules: &BadgeRules) -> Vec<BadgedDelta> {
    let mut badges = vec![BadgeSet::new(); cohort.len()];

    // Phase 1: orderings over indices. `sort_by` is stable, so ties keep input order.
    let mut gainers: Vec<usize> = (0..cohort.len())
        .filter(|&i| cohort[i].power_delta.is_positive())
        .collect();
    gainers.sort_by(|&a, &b| cohort[b].power_delta.cmp(&cohort[a].power_delta));

    let mut droppers: Vec<usize> = (0..cohort.len())
        .filter(|&i| cohort[i].power_delta.is_negative())
        .collect();
    droppers.sort_by(|&a, &b| cohort[a].power_delta.cmp(&cohort[b].power_delta));

    let mut strongest: Vec<usize> = (0..cohort.len()).collect();
    strongest.sort_by(|&a, &b| cohort[b].current_power.cmp(&cohort[a].current_power));

    // Phase 2: ranking badges
    for (ordering, badge) in [
        (&gainers, Badge::TopGainer),
        (&droppers, Badge::BiggestDrop),
        (&strongest, Badge::MostPowerful),
    ] {
        for &i in ordering.iter().take(rules.ranking_size) {
            badges[i].insert(badge);
        }
    }

    cohort
        .into_iter()
        .zip(badges)
        .map(|(delta, mut set)| {
            set.extend(threshold_badges(&delta, rules));
            BadgedDelta { delta, badges: set }
        })
        .collect()
}

/// Badges that depend only on the member's own numbers
fn threshold_badges(delta: &MemberDelta, rules: &BadgeRules) -> Vec<Badge> {
    let mut earned = Vec::new();
    let current = delta.current_power;
    let change = delta.power_delta;

    // Percentage rules are undefined without current power
    if current.is_positive() {
        if change.is_positive() && change.exceeds_percent_of(current, rules.rising_star_percent) {
            earned.push(Badge::RisingStar);
        }
        if change.abs().within_percent_of(current, rules.consistent_percent) {
            earned.push(Badge::Consistent);
        }
    }

    if delta.tier == Tier::I {
        earned.push(Badge::Whale);
    }

    // Whole current power arrived this week. Can misfire on a coincidental
    // net change, kept as-is.
    if change == current && change.is_positive() {
        earned.push(Badge::NewMember);
    }

    earned
}
