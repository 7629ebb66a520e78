use super::*;

/// Tests starting and ending a leave of absence.
///
/// Expected: Ok with the leave stored, then removed
#[tokio::test]
async fn sets_and_ends_leave() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;

    let repo = StaffRepository::new(db);
    let until = Utc::now() + Duration::days(7);
    repo.set_loa(1, Some(until), Some("Exams".to_string()))
        .await?;

    let member = repo.find_by_id(1).await?.unwrap();
    assert!(member.loa_until.is_some());
    assert_eq!(member.loa_reason.as_deref(), Some("Exams"));

    repo.set_loa(1, None, None).await?;

    let member = repo.find_by_id(1).await?.unwrap();
    assert!(member.loa_until.is_none());
    assert!(member.loa_reason.is_none());

    Ok(())
}

/// Tests clearing leaves that have ended.
///
/// Verifies that only leaves ending at or before `now` are cleared.
///
/// Expected: Ok(1) with the ongoing leave kept
#[tokio::test]
async fn clears_only_expired_leaves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    StaffMemberFactory::new(db)
        .discord_id(1)
        .loa(now - Duration::hours(1), "Over")
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .discord_id(2)
        .loa(now + Duration::days(2), "Ongoing")
        .build()
        .await?;
    StaffMemberFactory::new(db).discord_id(3).build().await?;

    let repo = StaffRepository::new(db);
    let cleared = repo.clear_expired_loa(now).await?;

    assert_eq!(cleared, 1);
    assert!(repo.find_by_id(1).await?.unwrap().loa_until.is_none());
    assert!(repo.find_by_id(2).await?.unwrap().loa_until.is_some());

    Ok(())
}
