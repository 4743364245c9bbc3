use super::*;

/// Tests deleting an order removes its items too.
///
/// Expected: Ok and no orders or order items remain
#[tokio::test]
async fn deletes_order_and_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let item = factory::create_menu_item(db).await?;
    let order = factory::create_order(db, customer.id).await?;
    factory::create_order_item(db, order.id, &item, 1).await?;

    OrderService::new(db).delete(order.id).await?;

    assert_eq!(Order::find().count(db).await?, 0);
    assert_eq!(OrderItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an order that does not exist.
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

    let result = OrderService::new(db).delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
