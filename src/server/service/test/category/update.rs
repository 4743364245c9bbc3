use super::*;

/// Tests replacing a category's slug and title.
///
/// Expected: Ok(Category) with the new values
#[tokio::test]
async fn updates_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_category(db).await?;

    let category = CategoryService::new(db)
        .update(UpdateCategoryParams {
            id: existing.id,
            slug: "desserts".to_string(),
            title: "Desserts".to_string(),
        })
        .await?;

    assert_eq!(category.id, existing.id);
    assert_eq!(category.slug, "desserts");
    assert_eq!(category.title, "Desserts");

    Ok(())
}

/// Tests that keeping a category's own slug and title is not treated as a duplicate.
///
/// Expected: Ok(Category)
#[tokio::test]
async fn allows_unchanged_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_category(db).await?;

    let result = CategoryService::new(db)
        .update(UpdateCategoryParams {
            id: existing.id,
            slug: existing.slug.clone(),
            title: existing.title.clone(),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that taking another category's slug and title is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_of_other_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_category(db).await?;
    let existing = factory::create_category(db).await?;

    let result = CategoryService::new(db)
        .update(UpdateCategoryParams {
            id: existing.id,
            slug: taken.slug,
            title: taken.title,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a category that does not exist.
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

    let result = CategoryService::new(db)
        .update(UpdateCategoryParams {
            id: 999,
            slug: "desserts".to_string(),
            title: "Desserts".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
