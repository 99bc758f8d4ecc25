//! Service context - dependency container for services
//!
//! Holds the two stores and the tier/badge tuning the services need.

use std::sync::Arc;

use club_common::AnalyticsConfig;
use club_core::analytics::{BadgeRules, TierThresholds};
use club_core::traits::{SnapshotRepository, WeeklyDeltaRepository};
use club_db::{PgPool, PgSnapshotRepository, PgWeeklyDeltaRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; stores are shared behind `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    snapshot_repo: Arc<dyn SnapshotRepository>,
    weekly_delta_repo: Arc<dyn WeeklyDeltaRepository>,

    // Tuning
    tier_thresholds: TierThresholds,
    badge_rules: BadgeRules,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        snapshot_repo: Arc<dyn SnapshotRepository>,
        weekly_delta_repo: Arc<dyn WeeklyDeltaRepository>,
        analytics: AnalyticsConfig,
    ) -> Self {
        Self {
            snapshot_repo,
            weekly_delta_repo,
            tier_thresholds: analytics.tier_thresholds,
            badge_rules: analytics.badge_rules,
        }
    }

    /// Wire the PostgreSQL stores over a single pool
    pub fn from_pool(pool: PgPool, analytics: AnalyticsConfig) -> Self {
        Self::new(
            Arc::new(PgSnapshotRepository::new(pool.clone())),
            Arc::new(PgWeeklyDeltaRepository::new(pool)),
            analytics,
        )
    }

    // === Repositories ===

    /// Get the snapshot repository
    pub fn snapshot_repo(&self) -> &dyn SnapshotRepository {
        self.snapshot_repo.as_ref()
    }

    /// Get the weekly delta repository
    pub fn weekly_delta_repo(&self) -> &dyn WeeklyDeltaRepository {
        self.weekly_delta_repo.as_ref()
    }

    // === Tuning ===

    pub fn tier_thresholds(&self) -> &TierThresholds {
        &self.tier_thresholds
    }

    pub fn badge_rules(&self) -> &BadgeRules {
        &self.badge_rules
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("tier_thresholds", &self.tier_thresholds)
            .field("badge_rules", &self.badge_rules)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    snapshot_repo: Option<Arc<dyn SnapshotRepository>>,
    weekly_delta_repo: Option<Arc<dyn WeeklyDeltaRepository>>,
    tier_thresholds: Option<TierThresholds>,
    badge_rules: Option<BadgeRules>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot_repo(mut self, repo: Arc<dyn SnapshotRepository>) -> Self {
        self.snapshot_repo = Some(repo);
        self
    }

    pub fn weekly_delta_repo(mut self, repo: Arc<dyn WeeklyDeltaRepository>) -> Self {
        self.weekly_delta_repo = Some(repo);
        self
    }

    pub fn tier_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.tier_thresholds = Some(thresholds);
        self
    }

    pub fn badge_rules(mut self, rules: BadgeRules) -> Self {
        self.badge_rules = Some(rules);
        self
    }

    /// Apply both tuning values from configuration
    pub fn analytics(self, analytics: AnalyticsConfig) -> Self {
        self.tier_thresholds(analytics.tier_thresholds)
            .badge_rules(analytics.badge_rules)
    }

    /// Build the ServiceContext
    ///
    /// Tuning falls back to defaults when not set.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let analytics = AnalyticsConfig {
            tier_thresholds: self.tier_thresholds.unwrap_or_default(),
            badge_rules: self.badge_rules.unwrap_or_default(),
        };

        Ok(ServiceContext::new(
            self.snapshot_repo
                .ok_or_else(|| ServiceError::validation("snapshot_repo is required"))?,
            self.weekly_delta_repo
                .ok_or_else(|| ServiceError::validation("weekly_delta_repo is required"))?,
            analytics,
        ))
    }
}
