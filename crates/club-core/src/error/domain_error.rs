//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid guild id: {0}")]
    InvalidGuildId(String),

    #[error("Invalid tier: {0}")]
    InvalidTier(String),

    #[error("Invalid tier thresholds: {0}")]
    InvalidTierThresholds(String),

    #[error("Value out of range for {field}: {value}")]
    ValueOutOfRange { field: &'static str, value: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGuildId(_) => "INVALID_GUILD_ID",
            Self::InvalidTier(_) => "INVALID_TIER",
            Self::InvalidTierThresholds(_) => "INVALID_TIER_THRESHOLDS",
            Self::ValueOutOfRange { .. } => "VALUE_OUT_OF_RANGE",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuildId(_)
                | Self::InvalidTier(_)
                | Self::InvalidTierThresholds(_)
                | Self::ValueOutOfRange { .. }
        )
    }
}
