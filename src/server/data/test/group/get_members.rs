use super::*;

/// Tests listing the members of one group.
///
/// Expected: members ordered by ID, users of other groups excluded
#[tokio::test]
async fn lists_members_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_delivery_crew(db).await?;
    factory::create_manager(db).await?;
    factory::create_user(db).await?;
    let second = factory::create_delivery_crew(db).await?;
    let crew = factory::get_or_create_group(db, group::DELIVERY_CREW).await?;

    let members = GroupRepository::new(db).get_members(crew.id).await?;

    let ids: Vec<i32> = members.iter().map(|member| member.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(members[0].username, first.username);

    Ok(())
}
