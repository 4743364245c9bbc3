use super::*;

/// Tests listing categories.
///
/// Expected: every category, ordered by ID
#[tokio::test]
async fn lists_categories_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let mains = repo
        .create(CreateCategoryParams {
            slug: "mains".to_string(),
            title: "Main Courses".to_string(),
        })
        .await?;
    let desserts = repo
        .create(CreateCategoryParams {
            slug: "desserts".to_string(),
            title: "Desserts".to_string(),
        })
        .await?;

    let categories = repo.get_all().await?;

    let ids: Vec<i32> = categories.iter().map(|category| category.id).collect();
    assert_eq!(ids, vec![mains.id, desserts.id]);
    assert_eq!(categories[1].slug, "desserts");

    Ok(())
}

/// Tests listing with no categories.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let categories = CategoryRepository::new(db).get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}
