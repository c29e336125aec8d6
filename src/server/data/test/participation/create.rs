use super::*;

/// Tests storing a participation with its role.
///
/// Expected: Ok and the role is readable back
#[tokio::test]
async fn stores_participation_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rider = factory::user::create_user(db).await?;
    let trip = factory::trip::create_trip(db).await?;

    let repo = ParticipationRepository::new(db);
    repo.create(rider.id, trip.id, ParticipationRole::Passenger)
        .await?;

    assert!(repo.exists(rider.id, trip.id).await?);
    assert_eq!(
        repo.role_of(rider.id, trip.id).await?,
        Some(ParticipationRole::Passenger)
    );

    Ok(())
}
