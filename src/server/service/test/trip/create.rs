use super::*;

/// Tests publishing a trip.
///
/// Verifies that the fee is debited and that the trip, the driver participation
/// and the vehicle link are written.
///
/// Expected: Ok((Trip, 18))
#[tokio::test]
async fn publishes_trip_and_debits_fee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db)
        .driver(true)
        .credits(20)
        .build()
        .await?;
    let vehicle = factory::vehicle::create_vehicle(db, driver.id).await?;

    let (trip, remaining) = TripService::new(db)
        .create(&User::from_entity(driver.clone()), trip_request(vehicle.id))
        .await?;

    assert_eq!(remaining, 18);
    assert_eq!(trip.departure_place, "Paris");
    assert_eq!(trip.seats, 3);
    assert_eq!(trip.status, TripStatus::Available);

    let participations = entity::prelude::Participation::find().all(db).await?;
    assert_eq!(participations.len(), 1);
    assert_eq!(participations[0].user_id, driver.id);
    assert_eq!(participations[0].trip_id, trip.id);

    let links = entity::prelude::TripVehicle::find().all(db).await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].vehicle_id, vehicle.id);

    Ok(())
}

/// Tests publishing with a single credit.
///
/// Expected: Err(TripError::InsufficientCredits) and no trip written
#[tokio::test]
async fn rejects_insufficient_credits_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db)
        .driver(true)
        .credits(1)
        .build()
        .await?;
    let vehicle = factory::vehicle::create_vehicle(db, driver.id).await?;

    let result = TripService::new(db)
        .create(&User::from_entity(driver.clone()), trip_request(vehicle.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::InsufficientCredits {
            required: 2,
            available: 1
        }))
    ));

    assert!(entity::prelude::Trip::find().all(db).await?.is_empty());
    assert!(entity::prelude::Participation::find().all(db).await?.is_empty());

    let driver = entity::prelude::User::find_by_id(driver.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(driver.credits, 1);

    Ok(())
}

/// Tests publishing without the driver flag.
///
/// Expected: Err(TripError::NotDriver)
#[tokio::test]
async fn rejects_non_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = TripService::new(db)
        .create(&User::from_entity(user), trip_request(1))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::NotDriver(_)))
    ));

    Ok(())
}

/// Tests publishing with a driver who owns no vehicle.
///
/// Expected: Err(TripError::NoVehicle)
#[tokio::test]
async fn rejects_driver_without_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;

    let result = TripService::new(db)
        .create(&User::from_entity(driver), trip_request(1))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::NoVehicle(_)))
    ));

    Ok(())
}

/// Tests publishing with another user's vehicle.
///
/// Expected: Err(TripError::VehicleNotOwned)
#[tokio::test]
async fn rejects_foreign_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    factory::vehicle::create_vehicle(db, driver.id).await?;
    let other = factory::user::UserFactory::new(db).driver(true).build().await?;
    let foreign = factory::vehicle::create_vehicle(db, other.id).await?;

    let result = TripService::new(db)
        .create(&User::from_entity(driver), trip_request(foreign.id))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::VehicleNotOwned { .. }))
    ));

    Ok(())
}

/// Tests a request whose arrival precedes its departure.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_arrival_before_departure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    let vehicle = factory::vehicle::create_vehicle(db, driver.id).await?;

    let request = CreateTripDto {
        heure_arrivee: Some("07:00".to_string()),
        ..trip_request(vehicle.id)
    };
    let result = TripService::new(db)
        .create(&User::from_entity(driver), request)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
