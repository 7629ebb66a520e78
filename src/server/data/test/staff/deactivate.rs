use super::*;

/// Tests deactivating an active member.
///
/// Expected: Ok(true) and the member no longer found as active
#[tokio::test]
async fn deactivates_active_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;

    let repo = StaffRepository::new(db);
    assert!(repo.deactivate(1).await?);
    assert!(repo.find_active_by_id(1).await?.is_none());
    assert!(repo.find_by_id(1).await?.is_some());

    Ok(())
}

/// Tests deactivating a member that is already inactive or unknown.
///
/// Expected: Ok(false) in both cases
#[tokio::test]
async fn returns_false_when_nothing_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .active(false)
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    assert!(!repo.deactivate(1).await?);
    assert!(!repo.deactivate(2).await?);

    Ok(())
}

/// Tests deactivating members missing from a full guild sync.
///
/// Verifies that only active members outside the given id set are deactivated.
///
/// Expected: Ok(1) with the missing member deactivated
#[tokio::test]
async fn deactivates_members_missing_from_sync() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;
    StaffMemberFactory::new(db).discord_id(2).build().await?;
    StaffMemberFactory::new(db)
        .discord_id(3)
        .active(false)
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let count = repo.deactivate_missing(&[1]).await?;

    assert_eq!(count, 1);
    assert!(repo.find_active_by_id(1).await?.is_some());
    assert!(repo.find_active_by_id(2).await?.is_none());

    Ok(())
}
