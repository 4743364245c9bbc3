use super::*;

/// Tests logging in with a correct username and password.
///
/// Expected: Ok(User) carrying the user's group names
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = UserFactory::new(db)
        .username("mario")
        .group(factory::group::MANAGER)
        .build()
        .await?;

    let user = AuthService::new(db)
        .login("mario", DEFAULT_PASSWORD.to_string())
        .await?;

    assert_eq!(user.id, manager.id);
    assert_eq!(user.groups, vec!["Manager".to_string()]);

    Ok(())
}

/// Tests that a wrong password is rejected.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("mario").build().await?;

    let result = AuthService::new(db)
        .login("mario", "not-the-password".to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an unknown username gets the same error as a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login("nobody", DEFAULT_PASSWORD.to_string())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
