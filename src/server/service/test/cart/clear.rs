use super::*;

/// Tests clearing a cart leaves other users' carts alone.
///
/// Expected: Ok(2) and only the other user's line remains
#[tokio::test]
async fn clears_only_own_cart() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_menu_item(db).await?;
    let second = factory::create_menu_item(db).await?;

    factory::create_cart_item(db, customer.id, &first, 1).await?;
    factory::create_cart_item(db, customer.id, &second, 1).await?;
    factory::create_cart_item(db, other.id, &first, 1).await?;

    let service = CartService::new(db);
    let removed = service.clear(customer.id).await?;

    assert_eq!(removed, 2);
    assert!(service.get_for_user(customer.id).await?.is_empty());
    assert_eq!(service.get_for_user(other.id).await?.len(), 1);

    Ok(())
}
