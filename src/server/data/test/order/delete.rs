use super::*;

/// Tests deleting an order with items.
///
/// Expected: Ok(true) and its items are removed with it
#[tokio::test]
async fn deletes_order_and_items() -> Result<(), DbErr> {
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

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(order.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(order.id).await?.is_none());
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = OrderRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
