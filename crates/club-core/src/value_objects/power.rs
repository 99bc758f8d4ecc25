//! Power - exact integer amount of power or sim currency
//!
//! Readings routinely exceed 2^53, so values are held as `i128` and never
//! pass through floating point. They are stored as BIGINT and serialized as
//! decimal strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Neg, Sub};

/// Exact signed amount (a reading or a difference between two readings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Power(i128);

impl Power {
    pub const ZERO: Power = Power(0);

    #[inline]
    pub const fn new(value: i128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Narrow to i64 for BIGINT storage
    pub fn to_i64(self) -> Result<i64, PowerRangeError> {
        i64::try_from(self.0).map_err(|_| PowerRangeError(self.0))
    }

    /// Whether `self` is strictly more than `percent`% of `whole`.
    ///
    /// Evaluated by cross-multiplication; `whole` must be positive.
    pub fn exceeds_percent_of(self, whole: Power, percent: u32) -> bool {
        self.0 * 100 > whole.0 * i128::from(percent)
    }

    /// Whether `self` is at most `percent`% of `whole` (`whole` positive).
    pub fn within_percent_of(self, whole: Power, percent: u32) -> bool {
        self.0 * 100 <= whole.0 * i128::from(percent)
    }

    /// Parse a decimal string
    pub fn parse(s: &str) -> Result<Self, PowerParseError> {
        let trimmed = s.trim().replace('_', "");
        trimmed
            .parse::<i128>()
            .map(Power)
            .map_err(|_| PowerParseError(s.to_string()))
    }
}

/// Value does not fit the storage column
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value {0} does not fit in a 64-bit column")]
pub struct PowerRangeError(pub i128);

/// Error when parsing a Power from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid power value: {0}")]
pub struct PowerParseError(pub String);

impl Sub for Power {
    type Output = Power;

    fn sub(self, rhs: Power) -> Power {
        Power(self.0 - rhs.0)
    }
}

impl Neg for Power {
    type Output = Power;

    fn neg(self) -> Power {
        Power(-self.0)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Power {
    fn from(value: i64) -> Self {
        Self(i128::from(value))
    }
}

impl From<u64> for Power {
    fn from(value: u64) -> Self {
        Self(i128::from(value))
    }
}

impl From<i128> for Power {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for Power {
    type Err = PowerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Power::parse(s)
    }
}

impl Serialize for Power {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Power {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PowerVisitor;

        impl Visitor<'_> for PowerVisitor {
            type Value = Power;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or integer amount")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Power, E>
            where
                E: de::Error,
            {
                Ok(Power::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Power, E>
            where
                E: de::Error,
            {
                Ok(Power::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Power, E>
            where
                E: de::Error,
            {
                Power::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(PowerVisitor)
    }
}
