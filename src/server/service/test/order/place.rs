use super::*;

/// Tests converting a cart into an order.
///
/// Verifies the total is the sum of the line prices, each cart line becomes an order
/// item, and the cart is emptied.
///
/// Expected: Ok(Order) with two items and total 31.00
#[tokio::test]
async fn places_order_from_cart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let salad = MenuItemFactory::new(db).price(money(1250)).build().await?;
    let bread = MenuItemFactory::new(db).price(money(300)).build().await?;
    factory::create_cart_item(db, customer.id, &salad, 2).await?;
    factory::create_cart_item(db, customer.id, &bread, 2).await?;

    let user = load_user(db, customer.id).await?;
    let order = OrderService::new(db).place(&user).await?;

    assert_eq!(order.user_id, customer.id);
    assert!(!order.status);
    assert!(order.delivery_crew.is_none());
    assert_eq!(order.total, money(3100));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].menuitem.id, salad.id);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[0].unit_price, money(1250));
    assert_eq!(order.items[0].price, money(2500));
    assert_eq!(order.items[1].price, money(600));

    let cart = CartRepository::new(db).get_by_user(customer.id).await?;
    assert!(cart.is_empty());

    Ok(())
}

/// Tests that placing an order with an empty cart is rejected.
///
/// Expected: Err(AppError::BadRequest) and no order created
#[tokio::test]
async fn rejects_empty_cart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let user = load_user(db, customer.id).await?;

    let result = OrderService::new(db).place(&user).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Order::find().count(db).await?, 0);

    Ok(())
}

/// Tests that delivery crew cannot place orders.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_delivery_crew() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::create_delivery_crew(db).await?;
    let item = factory::create_menu_item(db).await?;
    factory::create_cart_item(db, crew.id, &item, 1).await?;

    let user = load_user(db, crew.id).await?;
    let result = OrderService::new(db).place(&user).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a failure part way through placement changes nothing.
///
/// The order item table is left out so inserting the first item fails after the order row
/// has been written inside the transaction.
///
/// Expected: Err and the cart is intact with no order persisted
#[tokio::test]
async fn leaves_cart_untouched_on_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .with_table(Category)
        .with_table(MenuItem)
        .with_table(Cart)
        .with_table(Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let item = factory::create_menu_item(db).await?;
    factory::create_cart_item(db, customer.id, &item, 2).await?;

    let user = load_user(db, customer.id).await?;
    let result = OrderService::new(db).place(&user).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(CartRepository::new(db).get_by_user(customer.id).await?.len(), 1);
    assert_eq!(Order::find().count(db).await?, 0);

    Ok(())
}
