use super::*;

/// Tests adding a user to a group.
///
/// Expected: membership reported by `is_member` afterwards
#[tokio::test]
async fn adds_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let manager = factory::get_or_create_group(db, group::MANAGER).await?;

    let repo = GroupRepository::new(db);
    assert!(!repo.is_member(user.id, manager.id).await?);

    repo.add_member(user.id, manager.id).await?;

    assert!(repo.is_member(user.id, manager.id).await?);

    Ok(())
}
