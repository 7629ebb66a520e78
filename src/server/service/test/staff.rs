use super::*;
use crate::server::{
    data::staff::StaffRepository,
    model::staff::{SyncStaffMemberParam, UpdateProfileParam},
    service::staff::StaffService,
};
use test_utils::{builder::TestBuilder, factory::staff_member::StaffMemberFactory};

fn member(discord_id: u64, name: &str, roles: Vec<u64>) -> SyncStaffMemberParam {
    SyncStaffMemberParam {
        discord_id,
        username: name.to_lowercase(),
        display_name: name.to_string(),
        avatar: None,
        roles,
    }
}

/// Tests syncing a guild member with the staff role.
///
/// Expected: Ok(true) and an active roster entry
#[tokio::test]
async fn syncs_member_holding_staff_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let synced = StaffService::new(db)
        .sync_param(member(1, "Alice", vec![STAFF_ROLE, HELPER]), STAFF_ROLE)
        .await?;

    assert!(synced);
    let stored = StaffRepository::new(db).find_active_by_id(1).await?.unwrap();
    assert_eq!(stored.roles, vec![STAFF_ROLE, HELPER]);

    Ok(())
}

/// Tests syncing a member who lost the staff role.
///
/// Verifies that the existing roster entry is deactivated rather than deleted.
///
/// Expected: Ok(false) with the entry kept but inactive
#[tokio::test]
async fn deactivates_member_without_staff_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .roles(vec![STAFF_ROLE])
        .build()
        .await?;

    let synced = StaffService::new(db)
        .sync_param(member(1, "Alice", vec![HELPER]), STAFF_ROLE)
        .await?;

    assert!(!synced);
    let stored = StaffRepository::new(db).find_by_id(1).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests a full guild sync.
///
/// Verifies that staff missing from the member list drop off the roster and that
/// non-staff guild members are never added.
///
/// Expected: Ok((1, 1)) with only the listed staff member active
#[tokio::test]
async fn sync_guild_deactivates_missing_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(2)
        .roles(vec![STAFF_ROLE])
        .build()
        .await?;

    let (synced, deactivated) = StaffService::new(db)
        .sync_guild(
            vec![
                member(1, "Alice", vec![STAFF_ROLE]),
                member(3, "Visitor", vec![]),
            ],
            STAFF_ROLE,
        )
        .await?;

    assert_eq!(synced, 1);
    assert_eq!(deactivated, 1);

    let staff_repo = StaffRepository::new(db);
    assert!(staff_repo.find_active_by_id(1).await?.is_some());
    assert!(staff_repo.find_active_by_id(2).await?.is_none());
    assert!(staff_repo.find_by_id(3).await?.is_none());

    Ok(())
}

/// Tests roster ordering.
///
/// Expected: Ok with the highest rank first and ties ordered by name
#[tokio::test]
async fn roster_is_sorted_by_rank_then_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    StaffMemberFactory::new(db)
        .display_name("carol")
        .roles(vec![STAFF_ROLE, HELPER])
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .display_name("Bob")
        .roles(vec![STAFF_ROLE])
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .display_name("Dave")
        .roles(vec![STAFF_ROLE, ADMIN])
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .display_name("alice")
        .roles(vec![STAFF_ROLE, HELPER])
        .build()
        .await?;

    let roster = StaffService::new(db).get_roster(&config.rank_ladder).await?;

    let names: Vec<_> = roster.iter().map(|m| m.display_name.as_str()).collect();
    assert_eq!(names, vec!["Dave", "alice", "carol", "Bob"]);

    Ok(())
}

/// Tests fetching and editing members that are not on staff.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn inactive_members_are_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .active(false)
        .build()
        .await?;

    let service = StaffService::new(db);
    assert_not_found(service.get_member(1).await);
    assert_not_found(
        service
            .update_profile(
                1,
                UpdateProfileParam {
                    minecraft_nick: Some("alice".to_string()),
                    banner_url: None,
                },
            )
            .await,
    );

    Ok(())
}

/// Tests a profile update.
///
/// Expected: Ok with the new nick returned
#[tokio::test]
async fn updates_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .minecraft_nick("old_nick")
        .build()
        .await?;

    let updated = StaffService::new(db)
        .update_profile(
            1,
            UpdateProfileParam {
                minecraft_nick: Some("new_nick".to_string()),
                banner_url: Some("https://example.com/banner.png".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.minecraft_nick.as_deref(), Some("new_nick"));
    assert_eq!(
        updated.banner_url.as_deref(),
        Some("https://example.com/banner.png")
    );

    Ok(())
}
