use super::*;

/// Tests replacing every field of a menu item, including its category.
///
/// Expected: Ok(MenuItem) with the new values
#[tokio::test]
async fn updates_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_menu_item(db).await?;
    let category = factory::create_category(db).await?;

    let item = MenuItemService::new(db)
        .update(UpdateMenuItemParams {
            id: existing.id,
            title: "Lemon Dessert".to_string(),
            price: money(650),
            featured: true,
            category_id: category.id,
        })
        .await?;

    assert_eq!(item.id, existing.id);
    assert_eq!(item.title, "Lemon Dessert");
    assert_eq!(item.price, money(650));
    assert!(item.featured);
    assert_eq!(item.category.id, category.id);

    Ok(())
}

/// Tests updating a menu item that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let result = MenuItemService::new(db)
        .update(UpdateMenuItemParams {
            id: 999,
            title: "Lemon Dessert".to_string(),
            price: money(650),
            featured: false,
            category_id: category.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an update to a price that would round up to a filter bound is rejected.
///
/// Expected: Err(AppError::BadRequest) and the stored price unchanged, so the price shown
/// and the price filtered on stay the same value
#[tokio::test]
async fn rejects_price_with_extra_decimal_places() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_menu_item(db).await?;

    let service = MenuItemService::new(db);
    let result = service
        .update(UpdateMenuItemParams {
            id: existing.id,
            title: existing.title.clone(),
            price: Decimal::new(49996, 3),
            featured: false,
            category_id: existing.category_id,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let item = service.get_by_id(existing.id).await?;
    assert_eq!(item.price.to_string(), "10.00");

    Ok(())
}
