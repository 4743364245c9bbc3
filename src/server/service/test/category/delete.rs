use super::*;

/// Tests deleting a category.
///
/// Expected: Ok and the category is no longer found
#[tokio::test]
async fn deletes_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let service = CategoryService::new(db);
    service.delete(category.id).await?;

    assert!(matches!(
        service.get_by_id(category.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a category that does not exist.
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

    let result = CategoryService::new(db).delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
