use super::*;

/// Tests adding a user to the delivery crew.
///
/// Expected: Ok(true) and the user now has the role
#[tokio::test]
async fn adds_user_to_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = UserFactory::new(db).username("adrian").build().await?;

    let added = GroupService::new(db)
        .add_member(Role::DeliveryCrew, "adrian")
        .await?;

    assert!(added);
    assert!(load_user(db, customer.id)
        .await?
        .has_role(Role::DeliveryCrew));

    Ok(())
}

/// Tests that adding an existing member succeeds without a second membership.
///
/// Expected: Ok(false) and a single listed member
#[tokio::test]
async fn is_idempotent_for_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;

    let service = GroupService::new(db);
    let added = service
        .add_member(Role::Manager, &manager.username)
        .await?;

    assert!(!added);
    assert_eq!(service.get_members(Role::Manager).await?.len(), 1);

    Ok(())
}

/// Tests adding an unknown username.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db)
        .add_member(Role::Manager, "nobody")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
