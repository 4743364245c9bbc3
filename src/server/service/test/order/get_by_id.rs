use super::*;

/// Tests that a customer can read their own order.
///
/// Expected: Ok(Order)
#[tokio::test]
async fn returns_own_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let order = factory::create_order(db, customer.id).await?;

    let found = OrderService::new(db)
        .get_by_id(&load_user(db, customer.id).await?, order.id)
        .await?;

    assert_eq!(found.id, order.id);

    Ok(())
}

/// Tests that a customer cannot read another customer's order.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_customers_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let order = factory::create_order(db, other.id).await?;

    let result = OrderService::new(db)
        .get_by_id(&load_user(db, customer.id).await?, order.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that delivery crew cannot read orders assigned to someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_unassigned_crew() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::create_delivery_crew(db).await?;
    let customer = factory::create_user(db).await?;
    let order = factory::create_order(db, customer.id).await?;

    let result = OrderService::new(db)
        .get_by_id(&load_user(db, crew.id).await?, order.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests reading an order that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;

    let result = OrderService::new(db)
        .get_by_id(&load_user(db, manager.id).await?, 999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
