use super::*;

/// Tests taking a seat on an available trip.
///
/// Expected: Ok(true) and one seat fewer
#[tokio::test]
async fn takes_seat_on_available_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db).seats(3).build().await?;

    let taken = TripRepository::new(db).take_seat(trip.id).await?;

    assert!(taken);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.seats, 2);

    Ok(())
}

/// Tests that no seat is taken once the trip is empty.
///
/// Expected: Ok(false) and seats stay at 0
#[tokio::test]
async fn refuses_when_no_seat_left() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db).seats(0).build().await?;

    let taken = TripRepository::new(db).take_seat(trip.id).await?;

    assert!(!taken);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.seats, 0);

    Ok(())
}

/// Tests that a cancelled trip keeps its seats.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_on_cancelled_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db)
        .seats(2)
        .status(TripStatus::Cancelled)
        .build()
        .await?;

    let taken = TripRepository::new(db).take_seat(trip.id).await?;

    assert!(!taken);

    Ok(())
}
