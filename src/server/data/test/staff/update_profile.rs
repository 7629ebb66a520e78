use super::*;

/// Tests editing and clearing profile fields.
///
/// Expected: Ok with fields set, then cleared
#[tokio::test]
async fn sets_and_clears_profile_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;

    let repo = StaffRepository::new(db);
    repo.update_profile(
        1,
        UpdateProfileParam {
            minecraft_nick: Some("alice_mc".to_string()),
            banner_url: Some("https://example.com/banner.png".to_string()),
        },
    )
    .await?;

    let member = repo.find_by_id(1).await?.unwrap();
    assert_eq!(member.minecraft_nick.as_deref(), Some("alice_mc"));
    assert_eq!(
        member.banner_url.as_deref(),
        Some("https://example.com/banner.png")
    );

    repo.update_profile(
        1,
        UpdateProfileParam {
            minecraft_nick: None,
            banner_url: None,
        },
    )
    .await?;

    let member = repo.find_by_id(1).await?.unwrap();
    assert!(member.minecraft_nick.is_none());
    assert!(member.banner_url.is_none());

    Ok(())
}
