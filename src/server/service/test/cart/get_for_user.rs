use super::*;

/// Tests that a user's cart holds only their own lines.
///
/// Expected: Ok with the caller's two lines in insertion order
#[tokio::test]
async fn returns_only_own_lines() -> Result<(), AppError> {
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
    factory::create_cart_item(db, customer.id, &second, 2).await?;
    factory::create_cart_item(db, other.id, &first, 4).await?;

    let lines = CartService::new(db).get_for_user(customer.id).await?;

    let menuitem_ids: Vec<i32> = lines.iter().map(|line| line.menuitem.id).collect();
    assert_eq!(menuitem_ids, vec![first.id, second.id]);
    assert!(lines.iter().all(|line| line.user_id == customer.id));

    Ok(())
}
