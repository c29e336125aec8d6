use super::*;

/// Tests that the next bookable departure after the searched date is returned.
///
/// Expected: Ok(Some(earliest later date))
#[tokio::test]
async fn returns_earliest_later_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for day in [20, 12] {
        factory::trip::TripFactory::new(db)
            .route("Lille", "Paris")
            .date(NaiveDate::from_ymd_opt(2030, 5, day).unwrap())
            .build()
            .await?;
    }
    factory::trip::TripFactory::new(db)
        .route("Lille", "Paris")
        .date(NaiveDate::from_ymd_opt(2030, 5, 11).unwrap())
        .status(TripStatus::Cancelled)
        .build()
        .await?;

    let next = TripRepository::new(db)
        .next_available_date("Lille", "Paris", NaiveDate::from_ymd_opt(2030, 5, 10).unwrap())
        .await?;

    assert_eq!(next, NaiveDate::from_ymd_opt(2030, 5, 12));

    Ok(())
}

/// Tests the hint when nothing is scheduled later on the route.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_later_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::trip::TripFactory::new(db)
        .route("Lille", "Paris")
        .date(NaiveDate::from_ymd_opt(2030, 5, 1).unwrap())
        .build()
        .await?;

    let next = TripRepository::new(db)
        .next_available_date("Lille", "Paris", NaiveDate::from_ymd_opt(2030, 5, 10).unwrap())
        .await?;

    assert!(next.is_none());

    Ok(())
}
