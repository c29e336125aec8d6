use super::*;

/// Tests a confirmed booking on a trip with free seats.
///
/// Verifies that one seat and two credits are taken, a participation row is
/// written and the booking is mirrored to the document store.
///
/// Expected: Ok(Booked) with 18 credits left, 2 seats left
#[tokio::test]
async fn books_seat_when_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::UserFactory::new(db).credits(20).build().await?;

    let outcome = BookingService::new(db, &documents)
        .participate(&User::from_entity(rider.clone()), trip.id, true)
        .await?;

    assert_eq!(
        outcome,
        BookingOutcome::Booked {
            remaining_credits: 18
        }
    );

    let trip = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(trip.seats, 2);
    assert_eq!(trip.status, TripStatus::Available);

    let rider = entity::prelude::User::find_by_id(rider.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(rider.credits, 18);

    let participations = entity::prelude::Participation::find().all(db).await?;
    assert_eq!(
        participations
            .iter()
            .filter(|p| p.user_id == rider.id)
            .count(),
        1
    );

    let bookings = documents.all_bookings().await?;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].utilisateur.id, rider.id);
    assert_eq!(bookings[0].covoiturage.id, trip.id);
    assert_eq!(bookings[0].credits_utilises, 2);

    Ok(())
}

/// Tests a booking request without confirmation.
///
/// Expected: Ok(ConfirmationRequired) and nothing written
#[tokio::test]
async fn asks_confirmation_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::UserFactory::new(db).credits(20).build().await?;

    let outcome = BookingService::new(db, &documents)
        .participate(&User::from_entity(rider.clone()), trip.id, false)
        .await?;

    assert_eq!(outcome, BookingOutcome::ConfirmationRequired { credits: 20 });

    let trip = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(trip.seats, 3);

    let rider = entity::prelude::User::find_by_id(rider.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(rider.credits, 20);
    assert!(documents.all_bookings().await?.is_empty());

    Ok(())
}

/// Tests booking the same trip twice.
///
/// Expected: Err(TripError::AlreadyBooked)
#[tokio::test]
async fn rejects_double_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::create_user(db).await?;
    factory::participation::create_passenger(db, rider.id, trip.id).await?;

    let result = BookingService::new(db, &documents)
        .participate(&User::from_entity(rider), trip.id, true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::AlreadyBooked { .. }))
    ));

    Ok(())
}

/// Tests a rider confirming the same booking twice.
///
/// Verifies the second call leaves credits, seats, participations and booking
/// records exactly as the first booking left them.
///
/// Expected: Err(TripError::AlreadyBooked) with 18 credits, 2 seats, 1 record
#[tokio::test]
async fn second_booking_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::UserFactory::new(db).credits(20).build().await?;
    let service = BookingService::new(db, &documents);

    service
        .participate(&User::from_entity(rider.clone()), trip.id, true)
        .await?;

    let reloaded = entity::prelude::User::find_by_id(rider.id)
        .one(db)
        .await?
        .unwrap();
    let result = service
        .participate(&User::from_entity(reloaded), trip.id, true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::AlreadyBooked { user_id, trip_id }))
            if user_id == rider.id && trip_id == trip.id
    ));

    let rider = entity::prelude::User::find_by_id(rider.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(rider.credits, 18);

    let trip = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(trip.seats, 2);

    let participations = entity::prelude::Participation::find().all(db).await?;
    assert_eq!(
        participations
            .iter()
            .filter(|p| p.user_id == rider.id)
            .count(),
        1
    );
    assert_eq!(documents.all_bookings().await?.len(), 1);

    Ok(())
}

/// Tests booking a trip with no seat left.
///
/// Expected: Err(TripError::NoSeatsLeft)
#[tokio::test]
async fn rejects_trip_without_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let trip = factory::trip::TripFactory::new(db).seats(0).build().await?;
    let rider = factory::user::create_user(db).await?;

    let result = BookingService::new(db, &documents)
        .participate(&User::from_entity(rider), trip.id, true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::NoSeatsLeft(id))) if id == trip.id
    ));

    Ok(())
}

/// Tests booking with a balance below the fee.
///
/// Expected: Err(TripError::InsufficientCredits) with 1 credit available
#[tokio::test]
async fn rejects_insufficient_credits() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::UserFactory::new(db).credits(1).build().await?;

    let result = BookingService::new(db, &documents)
        .participate(&User::from_entity(rider), trip.id, true)
        .await;

    match result {
        Err(AppError::TripErr(TripError::InsufficientCredits {
            required,
            available,
        })) => {
            assert_eq!(required, 2);
            assert_eq!(available, 1);
        }
        other => panic!("Expected InsufficientCredits, got: {:?}", other),
    }

    Ok(())
}

/// Tests a user without the passenger flag.
///
/// Expected: Err(TripError::NotPassenger)
#[tokio::test]
async fn rejects_non_passenger() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let (_, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let user = factory::user::UserFactory::new(db)
        .passenger(false)
        .build()
        .await?;

    let result = BookingService::new(db, &documents)
        .participate(&User::from_entity(user), trip.id, true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::NotPassenger(_)))
    ));

    Ok(())
}

/// Tests booking a trip that is not bookable.
///
/// Expected: Err(TripError::NotBookable)
#[tokio::test]
async fn rejects_cancelled_trip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Cancelled)
        .build()
        .await?;
    let rider = factory::user::create_user(db).await?;

    let result = BookingService::new(db, &documents)
        .participate(&User::from_entity(rider), trip.id, true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::NotBookable { .. }))
    ));

    Ok(())
}

/// Tests that taking the last seat marks the trip full.
///
/// Expected: Ok(Booked), seats 0 and status complet
#[tokio::test]
async fn last_seat_marks_trip_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let trip = factory::trip::TripFactory::new(db).seats(1).build().await?;
    let rider = factory::user::create_user(db).await?;

    BookingService::new(db, &documents)
        .participate(&User::from_entity(rider), trip.id, true)
        .await?;

    let trip = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(trip.seats, 0);
    assert_eq!(trip.status, TripStatus::Full);

    Ok(())
}
