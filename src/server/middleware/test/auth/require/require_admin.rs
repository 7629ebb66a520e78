use super::*;

/// Tests admin user passes the admin check.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(123456789)
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(123456789).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.name, "AdminUser");
    assert!(user.admin);

    Ok(())
}

/// Tests non-admin user is denied the admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(987654321)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(987654321).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, 987654321)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.name)),
    }

    Ok(())
}
