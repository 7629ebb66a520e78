use super::*;

/// Tests filing a leave request.
///
/// Expected: Ok with a pending request found as the member's pending request
#[tokio::test]
async fn creates_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoaRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LoaRequestRepository::new(db);
    let request = repo
        .create(CreateLoaRequestParam {
            discord_id: 1,
            days: 14,
            reason: "Holiday".to_string(),
        })
        .await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.days, 14);
    assert!(request.reviewed_by.is_none());

    let pending = repo.find_pending_by_member(1).await?;
    assert_eq!(pending.map(|r| r.id), Some(request.id));
    assert!(repo.find_pending_by_member(2).await?.is_none());

    Ok(())
}

/// Tests cancelling a member's pending request.
///
/// Expected: Ok(1) and no pending request left
#[tokio::test]
async fn cancels_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoaRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = LoaRequestFactory::new(db).discord_id(1).build().await?;

    let repo = LoaRequestRepository::new(db);
    assert_eq!(repo.cancel_pending(1).await?, 1);
    assert!(repo.find_pending_by_member(1).await?.is_none());

    let cancelled = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(cancelled.status, RequestStatus::Cancelled);

    Ok(())
}
