use super::*;

/// Tests removing a membership.
///
/// Expected: Ok(true) the first time, Ok(false) once the user is no longer a member
#[tokio::test]
async fn removes_membership_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_manager(db).await?;
    let manager = factory::get_or_create_group(db, group::MANAGER).await?;

    let repo = GroupRepository::new(db);

    assert!(repo.remove_member(user.id, manager.id).await?);
    assert!(!repo.remove_member(user.id, manager.id).await?);
    assert!(!repo.is_member(user.id, manager.id).await?);

    Ok(())
}
