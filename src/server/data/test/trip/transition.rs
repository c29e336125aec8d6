use super::*;

/// Tests moving a trip from an allowed status.
///
/// Expected: Ok(true) and the new status stored
#[tokio::test]
async fn moves_trip_from_allowed_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::create_trip(db).await?;

    let moved = TripRepository::new(db)
        .transition(trip.id, &TripStatus::CANCELLABLE, TripStatus::Cancelled)
        .await?;

    assert!(moved);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TripStatus::Cancelled);

    Ok(())
}

/// Tests that a trip outside the `from` statuses is left untouched.
///
/// Expected: Ok(false) and status unchanged
#[tokio::test]
async fn leaves_trip_in_other_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;

    let moved = TripRepository::new(db)
        .transition(trip.id, &[TripStatus::Full], TripStatus::Available)
        .await?;

    assert!(!moved);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TripStatus::Completed);

    Ok(())
}
