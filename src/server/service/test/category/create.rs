use super::*;

/// Tests creating a category.
///
/// Expected: Ok(Category) with the given slug and title
#[tokio::test]
async fn creates_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryService::new(db)
        .create(CreateCategoryParams {
            slug: "mains".to_string(),
            title: "Mains".to_string(),
        })
        .await?;

    assert_eq!(category.slug, "mains");
    assert_eq!(category.title, "Mains");

    Ok(())
}

/// Tests that a second category with the same slug and title is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_slug_and_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db)
        .slug("mains")
        .title("Mains")
        .build()
        .await?;

    let result = CategoryService::new(db)
        .create(CreateCategoryParams {
            slug: "mains".to_string(),
            title: "Mains".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the same slug with a different title is allowed.
///
/// Expected: Ok(Category)
#[tokio::test]
async fn allows_same_slug_with_different_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db)
        .slug("mains")
        .title("Mains")
        .build()
        .await?;

    let result = CategoryService::new(db)
        .create(CreateCategoryParams {
            slug: "mains".to_string(),
            title: "Main Courses".to_string(),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a blank title is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryService::new(db)
        .create(CreateCategoryParams {
            slug: "mains".to_string(),
            title: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
