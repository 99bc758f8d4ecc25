//! Badges and their display metadata
//!
//! The metadata table is static; ids that are not recognised resolve to a
//! generic fallback entry instead of failing.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// Recognition badge. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    TopGainer,
    BiggestDrop,
    MostPowerful,
    RisingStar,
    Consistent,
    Whale,
    NewMember,
}

/// Badges earned by one member in one week
pub type BadgeSet = BTreeSet<Badge>;

impl Badge {
    pub const ALL: [Badge; 7] = [
        Badge::TopGainer,
        Badge::BiggestDrop,
        Badge::MostPowerful,
        Badge::RisingStar,
        Badge::Consistent,
        Badge::Whale,
        Badge::NewMember,
    ];

    /// Stable string id, as stored and served
    pub fn id(&self) -> &'static str {
        match self {
            Self::TopGainer => "top_gainer",
            Self::BiggestDrop => "biggest_drop",
            Self::MostPowerful => "most_powerful",
            Self::RisingStar => "rising_star",
            Self::Consistent => "consistent",
            Self::Whale => "whale",
            Self::NewMember => "new_member",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.id() == id)
    }

    pub fn metadata(&self) -> BadgeMetadata {
        let (label, description, color, emoji) = match self {
            Self::TopGainer => (
                "Top Gainer",
                "One of the top 3 members by power increase this week",
                "green",
                "📈",
            ),
            Self::BiggestDrop => (
                "Biggest Drop",
                "One of the top 3 members by power decrease this week",
                "red",
                "📉",
            ),
            Self::MostPowerful => (
                "Most Powerful",
                "One of the top 3 most powerful members",
                "gold",
                "⭐",
            ),
            Self::RisingStar => (
                "Rising Star",
                "Gained more than 50% power this week",
                "purple",
                "🌟",
            ),
            Self::Consistent => (
                "Consistent",
                "Power remained stable (within +/- 5%)",
                "blue",
                "🎯",
            ),
            Self::Whale => ("Whale", "Member of the prestigious Tier I", "platinum", "🐋"),
            Self::NewMember => ("New Member", "Just joined the club this week", "cyan", "🆕"),
        };
        BadgeMetadata {
            id: Cow::Borrowed(self.id()),
            label: Cow::Borrowed(label),
            description,
            color,
            emoji,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Display metadata for a badge id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeMetadata {
    pub id: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub description: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

impl BadgeMetadata {
    /// Generic entry for an id the registry does not know
    pub fn unknown(id: &str) -> Self {
        Self {
            id: Cow::Owned(id.to_string()),
            label: Cow::Owned(id.to_string()),
            description: "Unknown badge",
            color: "gray",
            emoji: "❓",
        }
    }

    pub fn is_unknown(&self) -> bool {
        Badge::from_id(&self.id).is_none()
    }
}

/// Look up metadata by id, falling back to the generic entry
pub fn badge_metadata(id: &str) -> BadgeMetadata {
    Badge::from_id(id).map_or_else(|| BadgeMetadata::unknown(id), |b| b.metadata())
}

/// Metadata for every badge in canonical order
pub fn all_badge_metadata() -> Vec<BadgeMetadata> {
    Badge::ALL.iter().map(Badge::metadata).collect()
}
