use super::*;

/// Tests changing only the status.
///
/// Expected: status set, delivery crew left as is
#[tokio::test]
async fn updates_status_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let crew = factory::create_delivery_crew(db).await?;
    let order = OrderFactory::new(db, customer.id)
        .delivery_crew_id(crew.id)
        .build()
        .await?;

    let updated = OrderRepository::new(db)
        .update(order, Some(true), None)
        .await?;

    assert!(updated.status);
    assert_eq!(updated.delivery_crew_id, Some(crew.id));

    Ok(())
}

/// Tests assigning and then unassigning delivery crew.
///
/// Expected: crew set by `Some(Some(id))` and cleared by `Some(None)`
#[tokio::test]
async fn assigns_and_unassigns_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let crew = factory::create_delivery_crew(db).await?;
    let order = factory::create_order(db, customer.id).await?;

    let repo = OrderRepository::new(db);
    let assigned = repo.update(order, None, Some(Some(crew.id))).await?;
    assert_eq!(assigned.delivery_crew_id, Some(crew.id));
    assert!(!assigned.status);

    let unassigned = repo.update(assigned, None, Some(None)).await?;
    assert_eq!(unassigned.delivery_crew_id, None);

    Ok(())
}
