use super::*;

/// Tests raising a warning count.
///
/// Expected: Ok with the level added to the stored count
#[tokio::test]
async fn adds_to_stored_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .warn_count(1)
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    repo.add_warn_count(1, 2).await?;

    assert_eq!(repo.find_by_id(1).await?.unwrap().warn_count, 3);

    Ok(())
}

/// Tests that two increments issued without re-reading the member both land.
///
/// Both updates are built before either runs, so a read-modify-write would store 2.
///
/// Expected: Ok with both increments applied
#[tokio::test]
async fn concurrent_increments_are_not_lost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .warn_count(1)
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let (first, second) = tokio::join!(repo.add_warn_count(1, 1), repo.add_warn_count(1, 2));
    first?;
    second?;

    assert_eq!(repo.find_by_id(1).await?.unwrap().warn_count, 4);

    Ok(())
}

/// Tests that lowering the count below zero stores zero.
///
/// Expected: Ok with the count floored at 0
#[tokio::test]
async fn floors_count_at_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .warn_count(1)
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    repo.add_warn_count(1, -3).await?;

    assert_eq!(repo.find_by_id(1).await?.unwrap().warn_count, 0);

    Ok(())
}

/// Tests updating a member that is not on the roster.
///
/// Expected: Ok with no member created
#[tokio::test]
async fn ignores_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.add_warn_count(1, 1).await?;

    assert!(repo.find_by_id(1).await?.is_none());

    Ok(())
}
