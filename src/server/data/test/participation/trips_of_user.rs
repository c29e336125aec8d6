use super::*;

/// Tests listing a user's trips with their role.
///
/// Expected: Ok with the latest departure first
#[tokio::test]
async fn lists_trips_newest_departure_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).driver(true).build().await?;
    let earlier = factory::trip::TripFactory::new(db)
        .date(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap())
        .build()
        .await?;
    let later = factory::trip::TripFactory::new(db)
        .date(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap())
        .build()
        .await?;
    factory::participation::create_passenger(db, user.id, earlier.id).await?;
    factory::participation::create_driver(db, user.id, later.id).await?;

    let trips = ParticipationRepository::new(db)
        .trips_of_user(user.id)
        .await?;

    let summary: Vec<_> = trips.iter().map(|(trip, role)| (trip.id, *role)).collect();
    assert_eq!(
        summary,
        vec![
            (later.id, ParticipationRole::Driver),
            (earlier.id, ParticipationRole::Passenger),
        ]
    );

    Ok(())
}
