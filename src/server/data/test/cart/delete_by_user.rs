use super::*;

/// Tests clearing one user's cart.
///
/// Expected: Ok(2) and the other user's cart untouched
#[tokio::test]
async fn clears_only_that_users_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_menu_item(db).await?;
    let second = factory::create_menu_item(db).await?;
    factory::create_cart_item(db, owner.id, &first, 1).await?;
    factory::create_cart_item(db, owner.id, &second, 1).await?;
    factory::create_cart_item(db, other.id, &first, 1).await?;

    let repo = CartRepository::new(db);
    let removed = repo.delete_by_user(owner.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_by_user(owner.id).await?.is_empty());
    assert_eq!(repo.get_by_user(other.id).await?.len(), 1);

    Ok(())
}
