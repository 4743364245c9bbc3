use super::*;

/// Tests looking up a user by exact username.
///
/// Expected: Some for the stored name, None for a different one
#[tokio::test]
async fn matches_exact_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).username("tilly").build().await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_username("tilly").await?.map(|user| user.id),
        Some(created.id)
    );
    assert!(repo.find_by_username("adrian").await?.is_none());

    Ok(())
}
