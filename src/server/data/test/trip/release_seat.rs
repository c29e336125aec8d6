use super::*;

/// Tests giving a seat back on a full trip.
///
/// Expected: Ok(true) and one seat more
#[tokio::test]
async fn releases_seat_on_full_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db)
        .seats(0)
        .status(TripStatus::Full)
        .build()
        .await?;

    let released = TripRepository::new(db).release_seat(trip.id).await?;

    assert!(released);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.seats, 1);

    Ok(())
}

/// Tests that a trip finished in the meantime keeps its seat count.
///
/// Expected: Ok(false) and seats unchanged
#[tokio::test]
async fn refuses_on_completed_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db)
        .seats(2)
        .status(TripStatus::Completed)
        .build()
        .await?;

    let released = TripRepository::new(db).release_seat(trip.id).await?;

    assert!(!released);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.seats, 2);

    Ok(())
}
