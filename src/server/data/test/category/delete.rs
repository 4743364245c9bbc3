use super::*;

/// Tests deleting a category with menu items.
///
/// Expected: Ok(true) and the category's menu items are removed with it
#[tokio::test]
async fn deletes_category_and_its_menu_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = factory::create_menu_item(db).await?;

    let deleted = CategoryRepository::new(db).delete(item.category_id).await?;

    assert!(deleted);
    let remaining = entity::prelude::MenuItem::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CategoryRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
