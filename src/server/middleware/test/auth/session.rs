use super::*;

/// Tests storing and clearing the logged-in user.
///
/// Expected: Ok with the id readable until the session is cleared
#[tokio::test]
async fn stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(802105175720460318).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(802105175720460318));

    auth_session.clear().await;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Tests that a CSRF token can be consumed only once.
///
/// Expected: Some(token) on the first take, None afterwards
#[tokio::test]
async fn csrf_token_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let csrf_session = CsrfSession::new(session);
    csrf_session.set_token("state-123".to_string()).await?;

    assert_eq!(
        csrf_session.take_token().await?,
        Some("state-123".to_string())
    );
    assert_eq!(csrf_session.take_token().await?, None);

    Ok(())
}
