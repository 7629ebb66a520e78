use super::*;

/// Tests listing pending requests.
///
/// Verifies that reviewed requests are excluded and the oldest comes first.
///
/// Expected: Ok with two pending requests, oldest first
#[tokio::test]
async fn returns_pending_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LoaRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    LoaRequestFactory::new(db)
        .discord_id(2)
        .created_at(now)
        .build()
        .await?;
    LoaRequestFactory::new(db)
        .discord_id(1)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    LoaRequestFactory::new(db)
        .discord_id(3)
        .status("approved")
        .reviewed_by(9)
        .build()
        .await?;

    let repo = LoaRequestRepository::new(db);
    let pending = repo.get_pending().await?;

    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].discord_id, 1);
    assert_eq!(pending[1].discord_id, 2);
    assert_eq!(repo.count_pending().await?, 2);

    Ok(())
}
