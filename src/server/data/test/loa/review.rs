use super::*;

/// Tests approving a pending request.
///
/// Expected: Ok(true) with status and reviewer stored
#[tokio::test]
async fn reviews_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoaRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = LoaRequestFactory::new(db).discord_id(1).build().await?;

    let repo = LoaRequestRepository::new(db);
    assert!(repo.review(request.id, RequestStatus::Approved, 9).await?);

    let reviewed = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(reviewed.status, RequestStatus::Approved);
    assert_eq!(reviewed.reviewed_by, Some(9));
    assert!(reviewed.reviewed_at.is_some());

    Ok(())
}

/// Tests reviewing a request a second time.
///
/// Verifies that a decided request cannot be overwritten by a later review.
///
/// Expected: Ok(false) with the first decision kept
#[tokio::test]
async fn does_not_review_twice() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoaRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = LoaRequestFactory::new(db).discord_id(1).build().await?;

    let repo = LoaRequestRepository::new(db);
    assert!(repo.review(request.id, RequestStatus::Rejected, 9).await?);
    assert!(!repo.review(request.id, RequestStatus::Approved, 8).await?);

    let reviewed = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(reviewed.status, RequestStatus::Rejected);
    assert_eq!(reviewed.reviewed_by, Some(9));

    Ok(())
}
