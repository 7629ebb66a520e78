use crate::server::service::stats::StatsService;
use test_utils::builder::TestBuilder;

/// Tests stats with no moderation databases configured.
///
/// Expected: all counters zero and an empty history
#[tokio::test]
async fn unconfigured_sources_read_as_zero() {
    let stats = StatsService::new(None, "litebans_", None).get("alice_mc").await;

    assert_eq!(stats.bans, 0);
    assert_eq!(stats.checks, 0);
    assert!(stats.history.is_empty());
}

/// Tests stats against databases missing the plugin tables.
///
/// Verifies that query failures fall back to zero instead of failing the request.
///
/// Expected: all counters zero
#[tokio::test]
async fn failing_sources_read_as_zero() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = StatsService::new(Some(db), "litebans_", Some(db))
        .get("alice_mc")
        .await;

    assert_eq!(stats.bans, 0);
    assert_eq!(stats.mutes, 0);
    assert_eq!(stats.checks, 0);
    assert_eq!(stats.playtime_seconds, 0);
    assert!(stats.history.is_empty());
}
