use super::*;

/// Tests listing pending appeals.
///
/// Verifies that reviewed appeals are excluded and the oldest comes first.
///
/// Expected: Ok with two pending appeals, oldest first
#[tokio::test]
async fn returns_pending_oldest_first() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let first = create_warning(db, 1).await?;
    let second = create_warning(db, 2).await?;
    let third = create_warning(db, 3).await?;

    AppealFactory::new(db, &first)
        .created_at(now)
        .build()
        .await?;
    AppealFactory::new(db, &second)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    AppealFactory::new(db, &third)
        .status("rejected")
        .reviewed_by(9)
        .build()
        .await?;

    let repo = AppealRepository::new(db);
    let pending = repo.get_pending().await?;

    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].appeal.discord_id, 2);
    assert_eq!(pending[1].appeal.discord_id, 1);
    assert_eq!(repo.count_pending().await?, 2);

    Ok(())
}

/// Tests listing a member's own appeals.
///
/// Expected: Ok with only the member's appeals, newest first
#[tokio::test]
async fn returns_member_appeals_newest_first() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = ActionLogFactory::new(db)
        .target_id(1)
        .reason("Older")
        .build()
        .await?;
    let newer = ActionLogFactory::new(db)
        .target_id(1)
        .reason("Newer")
        .build()
        .await?;
    let other = create_warning(db, 2).await?;

    AppealFactory::new(db, &older)
        .created_at(now - Duration::days(1))
        .status("approved")
        .reviewed_by(9)
        .build()
        .await?;
    AppealFactory::new(db, &newer).created_at(now).build().await?;
    AppealFactory::new(db, &other).build().await?;

    let repo = AppealRepository::new(db);
    let appeals = repo.get_by_member(1).await?;

    assert_eq!(appeals.len(), 2);
    assert_eq!(appeals[0].warning.reason, "Newer");
    assert_eq!(appeals[1].warning.reason, "Older");

    Ok(())
}
