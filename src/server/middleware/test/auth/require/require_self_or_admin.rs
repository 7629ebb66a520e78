use super::*;

/// Tests a user accessing their own resource.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(111)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(111).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(111)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a user accessing someone else's resource.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(111)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(111).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(222)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(111, _)))
    ));

    Ok(())
}

/// Tests an admin accessing another user's resource.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(111)
        .admin(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(111).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(222)])
        .await;

    assert!(result.is_ok());

    Ok(())
}
