//! Weekly analytics - week windows, tiers, snapshot diffing and badges
//!
//! Everything here is pure; loading snapshots and persisting results is the
//! service layer's job.

mod badge;
mod delta;
mod ranking;
mod tier;
mod week;

pub use badge::{all_badge_metadata, badge_metadata, Badge, BadgeMetadata, BadgeSet};
pub use delta::{diff_snapshots, MemberDelta};
pub use ranking::{assign_badges, BadgeRules, BadgedDelta};
pub use tier::{Tier, TierThresholds};
pub use week::WeekWindow;
