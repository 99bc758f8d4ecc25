//! Guild identifier - the internal 64-bit database id of a guild

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Internal guild id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GuildId(i64);

impl GuildId {
    /// Create a GuildId from a raw database value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, GuildIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(GuildId)
            .map_err(|_| GuildIdParseError::InvalidFormat)
    }
}

/// Error when parsing a GuildId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuildIdParseError {
    #[error("invalid guild id format")]
    InvalidFormat,
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GuildId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<GuildId> for i64 {
    fn from(id: GuildId) -> Self {
        id.0
    }
}

impl std::str::FromStr for GuildId {
    type Err = GuildIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuildId::parse(s)
    }
}

// Serialized as a string so JavaScript clients never round it through a double
impl Serialize for GuildId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accepts either a string or a number
impl<'de> Deserialize<'de> for GuildId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct GuildIdVisitor;

        impl Visitor<'_> for GuildIdVisitor {
            type Value = GuildId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer guild id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<GuildId, E>
            where
                E: de::Error,
            {
                Ok(GuildId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<GuildId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(GuildId)
                    .map_err(|_| de::Error::custom("guild id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<GuildId, E>
            where
                E: de::Error,
            {
                GuildId::parse(value).map_err(|_| de::Error::custom("invalid guild id string"))
            }
        }

        deserializer.deserialize_any(GuildIdVisitor)
    }
}
