//! Tier classification
//!
//! Tiers are derived from current power alone. The cut-offs live in an
//! ordered `(tier, minimum_inclusive)` table evaluated top-down, so they can be
//! retuned from configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Power;

/// Ordered tier label, `I` is the highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    I,
    II,
    III,
    IV,
}

impl Tier {
    /// All tiers, highest first
    pub const ALL: [Tier; 4] = [Tier::I, Tier::II, Tier::III, Tier::IV];

    /// The tier every unmatched power falls into
    pub const LOWEST: Tier = Tier::IV;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => Ok(Self::I),
            "II" => Ok(Self::II),
            "III" => Ok(Self::III),
            "IV" => Ok(Self::IV),
            other => Err(DomainError::InvalidTier(other.to_string())),
        }
    }
}

/// Ordered tier cut-offs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierThresholds {
    entries: Vec<(Tier, Power)>,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            entries: vec![
                (Tier::I, Power::from(10_000_000_000_i64)),
                (Tier::II, Power::from(1_000_000_000_i64)),
                (Tier::III, Power::from(100_000_000_i64)),
            ],
        }
    }
}

impl TierThresholds {
    /// Build a table from `(tier, minimum)` pairs, highest tier first.
    ///
    /// Tiers must be strictly ascending (I before II) and minimums strictly
    /// descending. The lowest tier is implicit and may not appear.
    pub fn new(entries: Vec<(Tier, Power)>) -> Result<Self, DomainError> {
        for pair in entries.windows(2) {
            let (upper_tier, upper_min) = pair[0];
            let (lower_tier, lower_min) = pair[1];
            if upper_tier >= lower_tier {
                return Err(DomainError::InvalidTierThresholds(format!(
                    "tier {lower_tier} listed after {upper_tier}"
                )));
            }
            if upper_min <= lower_min {
                return Err(DomainError::InvalidTierThresholds(format!(
                    "minimum for {upper_tier} ({upper_min}) must exceed minimum for {lower_tier} ({lower_min})"
                )));
            }
        }
        if entries.iter().any(|(tier, _)| *tier == Tier::LOWEST) {
            return Err(DomainError::InvalidTierThresholds(format!(
                "tier {} is the fallback and takes no minimum",
                Tier::LOWEST
            )));
        }
        Ok(Self { entries })
    }

    /// Parse `I=10000000000,II=1000000000,III=100000000`
    pub fn parse(spec: &str) -> Result<Self, DomainError> {
        let mut entries = Vec::new();
        for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (tier, min) = part.split_once('=').ok_or_else(|| {
                DomainError::InvalidTierThresholds(format!("expected TIER=MIN, got '{part}'"))
            })?;
            let tier: Tier = tier.parse()?;
            let min = Power::parse(min)
                .map_err(|e| DomainError::InvalidTierThresholds(e.to_string()))?;
            entries.push((tier, min));
        }
        Self::new(entries)
    }

    /// Map a power value to its tier. Absent power is the lowest tier.
    pub fn classify(&self, power: Option<Power>) -> Tier {
        let Some(power) = power else {
            return Tier::LOWEST;
        };
        self.entries
            .iter()
            .find(|(_, min)| power >= *min)
            .map_or(Tier::LOWEST, |(tier, _)| *tier)
    }

    /// Minimum for a tier, if it has one
    pub fn minimum(&self, tier: Tier) -> Option<Power> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, min)| *min)
    }
}
