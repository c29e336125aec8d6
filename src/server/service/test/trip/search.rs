use super::*;

fn params(date: NaiveDate) -> TripSearchParams {
    TripSearchParams {
        departure_place: "Paris".to_string(),
        arrival_place: "Lyon".to_string(),
        date,
        ecological_only: false,
        max_price: None,
        max_duration_minutes: None,
        min_note: None,
    }
}

/// Tests a search matching one trip with its driver.
///
/// Expected: Ok(Found) with one ecological result
#[tokio::test]
async fn finds_trip_on_route_and_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _, trip) = factory::helpers::create_trip_with_driver(db).await?;

    let outcome = TripService::new(db)
        .search(params(NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()))
        .await?;

    match outcome {
        TripSearchOutcome::Found(results) => {
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].trip.id, trip.id);
            assert_eq!(results[0].driver.id, driver.id);
            assert!(results[0].ecological);
        }
        other => panic!("Expected Found, got: {:?}", other),
    }

    Ok(())
}

/// Tests a search on a date without trips.
///
/// Expected: Ok(Empty) carrying the next later date with a bookable trip
#[tokio::test]
async fn suggests_next_available_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_trip_with_driver(db).await?;

    let outcome = TripService::new(db)
        .search(params(NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()))
        .await?;

    assert_eq!(
        outcome,
        TripSearchOutcome::Empty {
            next_date: NaiveDate::from_ymd_opt(2030, 1, 15)
        }
    );

    Ok(())
}

/// Tests that the price filter narrows the result.
///
/// Expected: Ok(Empty) when every trip costs more than the maximum
#[tokio::test]
async fn applies_max_price_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_trip_with_driver(db).await?;

    let outcome = TripService::new(db)
        .search(TripSearchParams {
            max_price: Some(5),
            ..params(NaiveDate::from_ymd_opt(2030, 1, 15).unwrap())
        })
        .await?;

    assert!(matches!(outcome, TripSearchOutcome::Empty { .. }));

    Ok(())
}

/// Tests that trips without a driver are left out.
///
/// Expected: Ok(Empty)
#[tokio::test]
async fn skips_trips_without_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::trip::create_trip(db).await?;

    let outcome = TripService::new(db)
        .search(params(NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()))
        .await?;

    assert!(matches!(outcome, TripSearchOutcome::Empty { .. }));

    Ok(())
}
