use super::*;

/// Tests that a caller without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests that any logged-in user passes when no permission is required.
///
/// Expected: Ok(User) with the session's user
#[tokio::test]
async fn allows_any_authenticated_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(customer.id).await?;

    let user = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(user.id, customer.id);
    assert!(user.groups.is_empty());

    Ok(())
}

/// Tests that a manager passes the manager check and carries its groups.
///
/// Expected: Ok(User) listing the "Manager" group
#[tokio::test]
async fn allows_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::user::create_manager(db).await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await?;

    assert_eq!(user.groups, vec!["Manager".to_string()]);

    Ok(())
}

/// Tests that a non-manager receives the endpoint's denial message.
///
/// Expected: Err(AuthError::AccessDenied) carrying the custom message
#[tokio::test]
async fn denies_customer_with_custom_message() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(customer.id).await?;

    let result = AuthGuard::new(db, session)
        .denial_message("Only managers can create categories")
        .require(&[Permission::Manager])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, customer.id);
            assert_eq!(message, "Only managers can create categories");
        }
        other => panic!("expected access denied, got {:?}", other),
    }

    Ok(())
}

/// Tests that delivery crew membership does not satisfy the manager check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_delivery_crew_manager_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let crew = factory::user::create_delivery_crew(db).await?;
    AuthSession::new(session).set_user_id(crew.id).await?;

    let crew_check = AuthGuard::new(db, session)
        .require(&[Permission::DeliveryCrew])
        .await;
    let manager_check = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await;

    assert!(crew_check.is_ok());
    assert!(matches!(
        manager_check,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
