use super::*;

/// Tests creating a menu item in an existing category.
///
/// Expected: Ok(MenuItem) with its category and a two-place price
#[tokio::test]
async fn creates_menu_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let item = MenuItemService::new(db)
        .create(CreateMenuItemParams {
            title: "Greek Salad".to_string(),
            price: Decimal::new(125, 1),
            featured: true,
            category_id: category.id,
        })
        .await?;

    assert_eq!(item.title, "Greek Salad");
    assert!(item.featured);
    assert_eq!(item.category.id, category.id);
    assert_eq!(item.price.to_string(), "12.50");

    Ok(())
}

/// Tests that a zero price is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_positive_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let result = MenuItemService::new(db)
        .create(CreateMenuItemParams {
            title: "Free Bread".to_string(),
            price: Decimal::ZERO,
            featured: false,
            category_id: category.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a missing category is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MenuItemService::new(db)
        .create(CreateMenuItemParams {
            title: "Greek Salad".to_string(),
            price: money(1250),
            featured: false,
            category_id: 999,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a price below one cent is rejected rather than stored and shown as "0.00".
///
/// Expected: Err(AppError::BadRequest) and no menu item created
#[tokio::test]
async fn rejects_sub_cent_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let service = MenuItemService::new(db);
    let result = service
        .create(CreateMenuItemParams {
            title: "Mint Leaf".to_string(),
            price: Decimal::new(4, 3),
            featured: false,
            category_id: category.id,
        })
        .await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Price must have at most 2 decimal places");
        }
        other => panic!("expected bad request, got {:?}", other),
    }
    let listed = service.get_paginated(MenuItemQuery::default()).await?;
    assert_eq!(listed.total, 0);

    Ok(())
}
