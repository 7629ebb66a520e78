use super::*;

/// Tests syncing a member seen for the first time.
///
/// Verifies that new members start active with no warnings, the starting balance and
/// their guild roles stored.
///
/// Expected: Ok with defaults applied and roles stored
#[tokio::test]
async fn inserts_new_member_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    let member = repo.sync_member(sync_param(1, "Alice", vec![10, 20])).await?;

    assert!(member.active);
    assert_eq!(member.warn_count, 0);
    assert_eq!(member.balance, STARTING_BALANCE);
    assert_eq!(member.display_name, "Alice");

    let mut roles = member.roles.clone();
    roles.sort();
    assert_eq!(roles, vec![10, 20]);

    Ok(())
}

/// Tests re-syncing a member that already has dashboard state.
///
/// Verifies that Discord-owned fields and roles are refreshed while warnings, balance
/// and the profile are kept, and that an inactive member is re-activated.
///
/// Expected: Ok with refreshed name and roles, preserved state
#[tokio::test]
async fn refreshes_discord_fields_and_keeps_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .display_name("Old")
        .active(false)
        .warn_count(2)
        .balance(1234)
        .minecraft_nick("alice_mc")
        .roles(vec![10])
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let member = repo.sync_member(sync_param(1, "New", vec![30])).await?;

    assert!(member.active);
    assert_eq!(member.display_name, "New");
    assert_eq!(member.warn_count, 2);
    assert_eq!(member.balance, 1234);
    assert_eq!(member.minecraft_nick.as_deref(), Some("alice_mc"));
    assert_eq!(member.roles, vec![30]);

    let stored = repo.find_by_id(1).await?.unwrap();
    assert_eq!(stored.roles, vec![30]);

    Ok(())
}
