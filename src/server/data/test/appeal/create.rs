use super::*;

/// Tests appealing a warning.
///
/// Verifies that the appeal is stored as pending and is returned together with the
/// warning it disputes.
///
/// Expected: Ok with the appeal linked to its warning
#[tokio::test]
async fn creates_appeal_with_warning() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let warning = create_warning(db, 1).await?;

    let repo = AppealRepository::new(db);
    let appeal = repo
        .create(CreateAppealParam {
            discord_id: 1,
            action_log_id: warning.id,
            text: "It was a misunderstanding.".to_string(),
        })
        .await?;

    assert_eq!(appeal.status, RequestStatus::Pending);
    assert!(repo.exists_for_action_log(warning.id).await?);

    let found = repo.find_by_id(appeal.id).await?.unwrap();
    assert_eq!(found.warning.id, warning.id);
    assert_eq!(found.appeal.text, "It was a misunderstanding.");

    Ok(())
}

/// Tests appealing the same warning twice.
///
/// Verifies that the unique index rejects a second appeal even when no existence
/// check ran first, and that the violation surfaces as a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_second_appeal_for_same_warning() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let warning = create_warning(db, 1).await?;
    AppealFactory::new(db, &warning).build().await?;

    let repo = AppealRepository::new(db);
    let result = repo
        .create(CreateAppealParam {
            discord_id: 1,
            action_log_id: warning.id,
            text: "Again".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.get_by_member(1).await?.len(), 1);

    Ok(())
}

/// Tests the existence check for a warning without an appeal.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_appeal() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let warning = create_warning(db, 1).await?;

    let repo = AppealRepository::new(db);
    assert!(!repo.exists_for_action_log(warning.id).await?);
    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
