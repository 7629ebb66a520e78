use super::*;

/// Tests listing the active roster.
///
/// Verifies that inactive members are excluded and roles are loaded per member.
///
/// Expected: Ok with only the active members and their roles
#[tokio::test]
async fn returns_only_active_members_with_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .roles(vec![10, 20])
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .discord_id(2)
        .roles(vec![10])
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .discord_id(3)
        .active(false)
        .roles(vec![10])
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let mut members = repo.get_active().await?;
    members.sort_by_key(|member| member.discord_id);

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].roles.len(), 2);
    assert_eq!(members[1].roles, vec![10]);

    Ok(())
}

/// Tests listing an empty roster.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    assert!(repo.get_active().await?.is_empty());

    Ok(())
}

/// Tests the display name lookup used by the review queues.
///
/// Verifies that inactive members are included so requests from former staff still
/// show a name.
///
/// Expected: Ok with a name for every roster entry
#[tokio::test]
async fn display_names_include_inactive_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .display_name("Alice")
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .discord_id(2)
        .display_name("Bob")
        .active(false)
        .build()
        .await?;

    let names = StaffRepository::new(db).get_display_names().await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&1).map(String::as_str), Some("Alice"));
    assert_eq!(names.get(&2).map(String::as_str), Some("Bob"));

    Ok(())
}
