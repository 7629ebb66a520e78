use super::*;

/// Tests recording a warning.
///
/// Verifies that the action is stored by its string form with the warn level.
///
/// Expected: Ok with the entry readable by id
#[tokio::test]
async fn records_warning() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActionLogRepository::new(db);
    let entry = repo
        .create(CreateActionLogParam {
            target_id: 1,
            admin_id: 2,
            action: LogAction::Warn,
            reason: "Spam".to_string(),
            detail: None,
            warn_level: Some(2),
        })
        .await?;

    assert_eq!(entry.action, "warn");
    assert!(entry.is_warning());

    let found = repo.find_by_id(entry.id).await?.unwrap();
    assert_eq!(found.target_id, 1);
    assert_eq!(found.admin_id, 2);
    assert_eq!(found.warn_level, Some(2));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests recording a rank change with its detail.
///
/// Expected: Ok with the detail stored and no warn level
#[tokio::test]
async fn records_promotion_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActionLogRepository::new(db);
    let entry = repo
        .create(CreateActionLogParam {
            target_id: 1,
            admin_id: 2,
            action: LogAction::Promote,
            reason: "Good work".to_string(),
            detail: Some("Trainee → Moderator".to_string()),
            warn_level: None,
        })
        .await?;

    assert!(!entry.is_warning());
    assert_eq!(entry.detail.as_deref(), Some("Trainee → Moderator"));

    Ok(())
}
