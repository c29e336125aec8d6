use super::*;

/// Tests that the search only returns bookable trips with seats on the exact route
/// and date.
///
/// Expected: Ok with the single matching trip
#[tokio::test]
async fn returns_only_bookable_trips_on_route_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2030, 3, 1).unwrap();
    let matching = factory::trip::TripFactory::new(db)
        .route("Paris", "Lyon")
        .date(date)
        .build()
        .await?;
    // Full, cancelled, other route, other date
    factory::trip::TripFactory::new(db)
        .route("Paris", "Lyon")
        .date(date)
        .seats(0)
        .build()
        .await?;
    factory::trip::TripFactory::new(db)
        .route("Paris", "Lyon")
        .date(date)
        .status(TripStatus::Cancelled)
        .build()
        .await?;
    factory::trip::TripFactory::new(db)
        .route("Paris", "Nantes")
        .date(date)
        .build()
        .await?;
    factory::trip::TripFactory::new(db)
        .route("Paris", "Lyon")
        .date(NaiveDate::from_ymd_opt(2030, 3, 2).unwrap())
        .build()
        .await?;

    let trips = TripRepository::new(db)
        .search_available("Paris", "Lyon", date)
        .await?;

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].id, matching.id);

    Ok(())
}
