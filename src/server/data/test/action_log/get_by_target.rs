use super::*;

/// Tests listing a member's history.
///
/// Verifies that entries for other members are excluded and the newest comes first.
///
/// Expected: Ok with two entries, newest first
#[tokio::test]
async fn returns_target_history_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    ActionLogFactory::new(db)
        .target_id(1)
        .reason("Older")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    ActionLogFactory::new(db)
        .target_id(1)
        .action("promote")
        .reason("Newer")
        .created_at(now)
        .build()
        .await?;
    ActionLogFactory::new(db).target_id(2).build().await?;

    let repo = ActionLogRepository::new(db);
    let history = repo.get_by_target(1).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].reason, "Newer");
    assert_eq!(history[1].reason, "Older");

    Ok(())
}
