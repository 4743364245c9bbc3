use super::*;

/// Tests that each group lists only its own members.
///
/// Expected: Ok with the manager in one list and the crew member in the other
#[tokio::test]
async fn lists_members_per_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let crew = factory::create_delivery_crew(db).await?;
    factory::create_user(db).await?;

    let service = GroupService::new(db);

    let managers = service.get_members(Role::Manager).await?;
    assert_eq!(managers.len(), 1);
    assert_eq!(managers[0].id, manager.id);

    let crew_members = service.get_members(Role::DeliveryCrew).await?;
    assert_eq!(crew_members.len(), 1);
    assert_eq!(crew_members[0].username, crew.username);

    Ok(())
}
