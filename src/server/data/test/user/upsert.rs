use super::*;

/// Tests creating a new user on first login.
///
/// Verifies that the repository inserts a user with the given name and admin flag.
///
/// Expected: Ok with the user created
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
            admin: false,
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert!(!user.admin);

    Ok(())
}

/// Tests refreshing an existing user on a later login.
///
/// Verifies that the name and admin flag are overwritten so configuration changes
/// to the admin list apply on the next login.
///
/// Expected: Ok with updated name and admin flag revoked
#[tokio::test]
async fn overwrites_name_and_admin_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id(123456789)
        .name("OldName")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "NewName".to_string(),
            admin: false,
        })
        .await?;

    assert_eq!(user.name, "NewName");
    assert!(!user.admin);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
