use super::*;

/// Tests listing the participants of a trip.
///
/// Verifies the driver comes first and passengers follow in booking order.
///
/// Expected: Ok with driver then passengers
#[tokio::test]
async fn lists_driver_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::create_trip(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    factory::participation::create_passenger(db, first.id, trip.id).await?;
    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    factory::participation::create_driver(db, driver.id, trip.id).await?;
    factory::participation::create_passenger(db, second.id, trip.id).await?;

    let participants = ParticipationRepository::new(db)
        .participants_of(trip.id)
        .await?;

    let summary: Vec<_> = participants
        .iter()
        .map(|(user, role)| (user.id, *role))
        .collect();
    assert_eq!(
        summary,
        vec![
            (driver.id, ParticipationRole::Driver),
            (first.id, ParticipationRole::Passenger),
            (second.id, ParticipationRole::Passenger),
        ]
    );

    assert_eq!(
        ParticipationRepository::new(db).driver_of(trip.id).await?,
        Some(driver.id)
    );

    Ok(())
}
