//! End-to-end pipeline tests over in-memory stores
//!
//! Run with: cargo test -p integration-tests --test pipeline_tests

use chrono::{Duration, TimeZone, Utc};

use club_core::analytics::{Badge, Tier, WeekWindow};
use club_core::entities::WeeklyDelta;
use club_core::value_objects::Power;
use club_service::dto::{ComputeSummaryResponse, WeeklyReportResponse};
use club_service::WeeklyAggregationService;
use integration_tests::*;

fn row<'r>(rows: &'r [WeeklyDelta], key: &str) -> &'r WeeklyDelta {
    rows.iter()
        .find(|r| r.member_key == key)
        .unwrap_or_else(|| panic!("no row for {key}"))
}

// ============================================================================
// Compute
// ============================================================================

#[tokio::test]
async fn test_promotion_scenario() {
    let guild = unique_guild();
    let harness = TestHarness::new(promotion_scenario(guild));

    let outcome = WeeklyAggregationService::new(&harness.ctx)
        .compute_weekly_deltas(guild, Some(wednesday()), true)
        .await
        .unwrap();

    assert_eq!(outcome.week.start, Utc.with_ymd_and_hms(2024, 5, 13, 0, 0, 0).unwrap());
    assert_eq!(outcome.deltas.len(), 2);

    let m1 = row(&outcome.deltas, "m1");
    assert_eq!(m1.power_delta, Power::new(7_000_000_000));
    assert_eq!(m1.tier, Tier::I);
    assert!(m1.has_badge(Badge::TopGainer));
    assert!(m1.has_badge(Badge::Whale));
    assert!(m1.has_badge(Badge::MostPowerful));
    assert!(!m1.has_badge(Badge::NewMember));

    let m2 = row(&outcome.deltas, "m2");
    assert_eq!(m2.power_delta, Power::new(50_000_000));
    assert_eq!(m2.tier, Tier::IV);
    assert!(m2.has_badge(Badge::NewMember));
    assert!(m2.has_badge(Badge::RisingStar));
    assert!(m2.sim_delta.is_none());
}

#[tokio::test]
async fn test_mixed_cohort_badges() {
    let guild = unique_guild();
    let harness = TestHarness::new(mixed_cohort(guild));

    let outcome = WeeklyAggregationService::new(&harness.ctx)
        .compute_weekly_deltas(guild, Some(wednesday()), false)
        .await
        .unwrap();
    let rows = &outcome.deltas;

    // Departed members are dropped
    assert!(rows.iter().all(|r| r.member_key != "leaver"));
    assert_eq!(rows.len(), 7);

    let steady = row(rows, "steady");
    assert_eq!(steady.sim_delta, Some(Power::new(-50)));
    assert!(steady.has_badge(Badge::Consistent));
    assert!(!steady.has_badge(Badge::RisingStar));

    let climber = row(rows, "climber");
    assert!(climber.has_badge(Badge::RisingStar));
    assert!(climber.has_badge(Badge::TopGainer));

    let faller = row(rows, "faller");
    assert!(faller.has_badge(Badge::BiggestDrop));
    assert!(!faller.has_badge(Badge::Consistent));

    let idle = row(rows, "idle");
    assert!(idle.badges.is_empty(), "zero power earns nothing: {:?}", idle.badges);

    let titan = row(rows, "titan");
    assert!(titan.has_badge(Badge::Whale));
    assert!(titan.has_badge(Badge::NewMember));
    assert_eq!(titan.tier, Tier::I);

    // Each ranking badge goes to at most three members
    for badge in [Badge::TopGainer, Badge::BiggestDrop, Badge::MostPowerful] {
        let holders = rows.iter().filter(|r| r.has_badge(badge)).count();
        assert!(holders <= 3, "{badge} awarded {holders} times");
    }
    assert_eq!(rows.iter().filter(|r| r.has_badge(Badge::BiggestDrop)).count(), 2);
}

#[tokio::test]
async fn test_single_snapshot_deltas_equal_power() {
    let guild = unique_guild();
    let only = snapshot(
        unique_suffix(),
        guild,
        wednesday(),
        &[Member::new("a", 15_000_000_000).with_sim(7), Member::new("b", 9)],
    );
    let harness = TestHarness::new(vec![only]);

    let outcome = WeeklyAggregationService::new(&harness.ctx)
        .compute_weekly_deltas(guild, Some(wednesday()), false)
        .await
        .unwrap();

    for r in &outcome.deltas {
        assert_eq!(r.power_delta, r.current_power);
        assert!(r.sim_delta.is_none());
    }
}

#[tokio::test]
async fn test_no_snapshots_is_empty_not_error() {
    let harness = TestHarness::new(Vec::new());
    let outcome = WeeklyAggregationService::new(&harness.ctx)
        .compute_weekly_deltas(unique_guild(), Some(wednesday()), true)
        .await
        .unwrap();

    assert!(outcome.deltas.is_empty());
    assert_eq!(harness.deltas.write_count(), 0);
}

#[tokio::test]
async fn test_snapshots_after_week_end_are_ignored() {
    let guild = unique_guild();
    let mut snapshots = promotion_scenario(guild);
    snapshots.push(snapshot(
        unique_suffix(),
        guild,
        WeekWindow::containing(wednesday()).end + Duration::milliseconds(1),
        &[Member::new("m1", 1)],
    ));
    let harness = TestHarness::new(snapshots);

    let outcome = WeeklyAggregationService::new(&harness.ctx)
        .compute_weekly_deltas(guild, Some(wednesday()), false)
        .await
        .unwrap();
    assert_eq!(row(&outcome.deltas, "m1").current_power, Power::new(12_000_000_000));
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_recompute_is_idempotent() {
    let guild = unique_guild();
    let harness = TestHarness::new(mixed_cohort(guild));
    let service = WeeklyAggregationService::new(&harness.ctx);

    service.compute_weekly_deltas(guild, Some(wednesday()), true).await.unwrap();
    let first: Vec<_> = harness.deltas.all_rows();

    service.compute_weekly_deltas(guild, Some(wednesday()), true).await.unwrap();
    let second: Vec<_> = harness.deltas.all_rows();

    assert_eq!(harness.deltas.row_count(), 7);
    assert_eq!(harness.deltas.write_count(), 14);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.key(), b.key());
        assert_eq!(a.power_delta, b.power_delta);
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.badges, b.badges);
        assert_eq!(a.created_at, b.created_at);
    }
}

#[tokio::test]
async fn test_partial_failure_reports_failed_members() {
    let guild = unique_guild();
    let harness = TestHarness::with_store(
        mixed_cohort(guild),
        InMemoryWeeklyDeltaStore::failing_on(&["faller", "titan"]),
    );

    let outcome = WeeklyAggregationService::new(&harness.ctx)
        .compute_weekly_deltas(guild, Some(wednesday()), true)
        .await
        .unwrap();

    assert!(outcome.is_partial());
    assert_eq!(outcome.deltas.len(), 5);
    assert_eq!(harness.deltas.row_count(), 5);

    let mut failed: Vec<_> = outcome.failed.iter().map(|f| f.member_key.as_str()).collect();
    failed.sort_unstable();
    assert_eq!(failed, vec!["faller", "titan"]);

    // Badges were assigned over the whole cohort, not just the saved part
    let stored = harness.deltas.all_rows();
    assert!(stored.iter().all(|r| r.member_key != "titan"));
    assert!(row(&stored, "steady").has_badge(Badge::TopGainer));
    assert!(!row(&stored, "rookie").has_badge(Badge::TopGainer));

    let summary = ComputeSummaryResponse::from(&outcome);
    assert_eq!(summary.computed, 5);
    assert_eq!(summary.failed.len(), 2);
}

// ============================================================================
// Read path
// ============================================================================

#[tokio::test]
async fn test_read_path_orders_and_defaults() {
    let guild = unique_guild();
    let harness = TestHarness::new(mixed_cohort(guild));
    let service = WeeklyAggregationService::new(&harness.ctx);

    assert!(service.get_weekly_deltas(guild, None).await.unwrap().is_empty());
    assert!(service.list_weeks(guild).await.unwrap().is_empty());

    service.compute_weekly_deltas(guild, Some(wednesday()), true).await.unwrap();
    service
        .compute_weekly_deltas(guild, Some(wednesday() - Duration::days(7)), true)
        .await
        .unwrap();

    let latest = service.get_weekly_deltas(guild, None).await.unwrap();
    assert_eq!(latest.len(), 7);
    assert!(latest.windows(2).all(|w| {
        w[0].power_delta > w[1].power_delta
            || (w[0].power_delta == w[1].power_delta && w[0].current_power >= w[1].current_power)
    }));
    assert_eq!(latest[0].member_key, "titan");

    // Sunday evening still selects the same week
    let sunday = WeekWindow::containing(wednesday()).end - Duration::hours(1);
    let same = service.get_weekly_deltas(guild, Some(sunday)).await.unwrap();
    assert_eq!(same.len(), latest.len());

    let weeks = service.list_weeks(guild).await.unwrap();
    assert_eq!(weeks, vec![WeekWindow::containing(wednesday()), WeekWindow::containing(wednesday()).previous()]);

    let report = WeeklyReportResponse::new(guild, &latest);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["deltas"][0]["current_power"], serde_json::json!("20000000000"));
    assert_eq!(json["count"], serde_json::json!(7));
}
