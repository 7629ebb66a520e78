use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .discord_id(42)
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(42).await?;

    assert!(user.is_some());
    assert!(user.unwrap().admin);

    Ok(())
}

/// Tests looking up an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(42).await?;

    assert!(user.is_none());

    Ok(())
}
