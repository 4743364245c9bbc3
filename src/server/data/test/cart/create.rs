use super::*;

/// Tests inserting a priced cart row.
///
/// Expected: Ok with the prices stored as given
#[tokio::test]
async fn stores_prices() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = factory::create_menu_item(db).await?;

    let row = CartRepository::new(db)
        .create(CreateCartItemParams {
            user_id: user.id,
            menuitem_id: item.id,
            quantity: 3,
            unit_price: Decimal::new(1000, 2),
            price: Decimal::new(3000, 2),
        })
        .await?;

    assert_eq!(row.user_id, user.id);
    assert_eq!(row.quantity, 3);
    assert_eq!(row.price, Decimal::new(3000, 2));

    Ok(())
}
