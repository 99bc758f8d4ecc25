//! Pipeline tests against PostgreSQL
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test postgres_tests

use club_common::AnalyticsConfig;
use club_core::analytics::Badge;
use club_core::value_objects::Power;
use club_service::{ServiceContext, WeeklyAggregationService};
use integration_tests::*;

#[tokio::test]
async fn test_compute_and_read_back() {
    let Some(pool) = test_pool().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let guild = unique_guild();
    for snapshot in promotion_scenario(guild) {
        insert_snapshot(&pool, &snapshot).await.unwrap();
    }

    let ctx = ServiceContext::from_pool(pool, AnalyticsConfig::default());
    let service = WeeklyAggregationService::new(&ctx);

    let outcome = service.compute_weekly_deltas(guild, Some(wednesday()), true).await.unwrap();
    assert!(!outcome.is_partial());
    assert_eq!(outcome.deltas.len(), 2);

    let stored = service.get_weekly_deltas(guild, None).await.unwrap();
    let keys: Vec<_> = stored.iter().map(|r| r.member_key.as_str()).collect();
    assert_eq!(keys, vec!["m1", "m2"]);
    assert_eq!(stored[0].power_delta, Power::new(7_000_000_000));
    assert!(stored[0].has_badge(Badge::Whale));
    assert!(stored[1].has_badge(Badge::NewMember));
    assert_eq!(stored[1].display_name, "M2");
}

#[tokio::test]
async fn test_recompute_keeps_one_row_per_member() {
    let Some(pool) = test_pool().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let guild = unique_guild();
    for snapshot in mixed_cohort(guild) {
        insert_snapshot(&pool, &snapshot).await.unwrap();
    }

    let ctx = ServiceContext::from_pool(pool.clone(), AnalyticsConfig::default());
    let service = WeeklyAggregationService::new(&ctx);

    let first = service.compute_weekly_deltas(guild, Some(wednesday()), true).await.unwrap();
    let second = service.compute_weekly_deltas(guild, Some(wednesday()), true).await.unwrap();
    assert_eq!(first.deltas.len(), second.deltas.len());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM club_weekly_deltas WHERE guild_id = $1")
        .bind(guild.into_inner())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 7);

    let weeks = service.list_weeks(guild).await.unwrap();
    assert_eq!(weeks.len(), 1);
}
