use super::*;

/// Tests a rider reviewing a completed trip.
///
/// Expected: Ok(Review) pending moderation and addressed to the driver
#[tokio::test]
async fn creates_pending_review_for_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;
    factory::participation::create_driver(db, driver.id, trip.id).await?;
    let rider = factory::user::create_user(db).await?;
    factory::participation::create_passenger(db, rider.id, trip.id).await?;

    let created = ReviewService::new(db)
        .create(rider.id, trip.id, review(5))
        .await?;

    assert_eq!(created.driver_id, driver.id);
    assert_eq!(created.author_id, rider.id);
    assert_eq!(created.rating, 5);
    assert_eq!(created.status, ReviewStatus::Pending);

    Ok(())
}

/// Tests reviewing a trip that is not completed yet.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_trip_not_completed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::create_user(db).await?;
    factory::participation::create_passenger(db, rider.id, trip.id).await?;

    let result = ReviewService::new(db)
        .create(rider.id, trip.id, review(4))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a review from someone who did not ride.
///
/// Expected: Err(TripError::NotTripPassenger)
#[tokio::test]
async fn rejects_non_passenger() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;
    factory::participation::create_driver(db, driver.id, trip.id).await?;

    let result = ReviewService::new(db)
        .create(driver.id, trip.id, review(5))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::NotTripPassenger { user_id, trip_id }))
            if user_id == driver.id && trip_id == trip.id
    ));

    Ok(())
}

/// Tests a second review by the same rider.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_second_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;
    factory::participation::create_driver(db, driver.id, trip.id).await?;
    let rider = factory::user::create_user(db).await?;
    factory::participation::create_passenger(db, rider.id, trip.id).await?;

    let service = ReviewService::new(db);
    service.create(rider.id, trip.id, review(5)).await?;
    let result = service.create(rider.id, trip.id, review(3)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a rating outside 1 to 5.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_rating_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReviewService::new(db).create(1, 1, review(6)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
