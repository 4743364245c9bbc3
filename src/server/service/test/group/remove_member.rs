use super::*;

/// Tests removing a member from a group.
///
/// Expected: Ok and the user no longer has the role
#[tokio::test]
async fn removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::create_delivery_crew(db).await?;

    GroupService::new(db)
        .remove_member(Role::DeliveryCrew, crew.id)
        .await?;

    assert!(!load_user(db, crew.id).await?.has_role(Role::DeliveryCrew));

    Ok(())
}

/// Tests removing a user who is not in the group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;

    let result = GroupService::new(db)
        .remove_member(Role::Manager, customer.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests removing a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db)
        .remove_member(Role::Manager, 999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
