use super::*;

/// Tests approving a pending appeal.
///
/// Expected: Ok(true) with the decision stored
#[tokio::test]
async fn approves_pending_appeal() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let warning = create_warning(db, 1).await?;
    let appeal = AppealFactory::new(db, &warning).build().await?;

    let repo = AppealRepository::new(db);
    assert!(repo.review(appeal.id, RequestStatus::Approved, 9).await?);

    let reviewed = repo.find_by_id(appeal.id).await?.unwrap();
    assert_eq!(reviewed.appeal.status, RequestStatus::Approved);
    assert_eq!(reviewed.appeal.reviewed_by, Some(9));

    Ok(())
}

/// Tests reviewing an appeal that was already decided.
///
/// Expected: Ok(false) with the first decision kept
#[tokio::test]
async fn ignores_already_reviewed_appeal() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let warning = create_warning(db, 1).await?;
    let appeal = AppealFactory::new(db, &warning)
        .status("rejected")
        .reviewed_by(9)
        .build()
        .await?;

    let repo = AppealRepository::new(db);
    assert!(!repo.review(appeal.id, RequestStatus::Approved, 8).await?);

    let reviewed = repo.find_by_id(appeal.id).await?.unwrap();
    assert_eq!(reviewed.appeal.status, RequestStatus::Rejected);

    Ok(())
}
