use super::*;

/// Tests removing a participation.
///
/// Expected: Ok(true) then the user no longer participates
#[tokio::test]
async fn removes_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rider = factory::user::create_user(db).await?;
    let trip = factory::trip::create_trip(db).await?;
    factory::participation::create_passenger(db, rider.id, trip.id).await?;

    let repo = ParticipationRepository::new(db);
    let removed = repo.delete(rider.id, trip.id).await?;

    assert!(removed);
    assert!(!repo.exists(rider.id, trip.id).await?);

    Ok(())
}

/// Tests removing a participation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rider = factory::user::create_user(db).await?;
    let trip = factory::trip::create_trip(db).await?;

    let removed = ParticipationRepository::new(db)
        .delete(rider.id, trip.id)
        .await?;

    assert!(!removed);

    Ok(())
}
