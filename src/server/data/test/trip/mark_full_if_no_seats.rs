use super::*;

/// Tests that a bookable trip without seats becomes full.
///
/// Expected: Ok(true) and status `complet`
#[tokio::test]
async fn marks_empty_trip_full() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db).seats(0).build().await?;

    let marked = TripRepository::new(db).mark_full_if_no_seats(trip.id).await?;

    assert!(marked);
    let stored = entity::prelude::Trip::find_by_id(trip.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TripStatus::Full);

    Ok(())
}

/// Tests that a trip with seats left keeps its status.
///
/// Expected: Ok(false)
#[tokio::test]
async fn keeps_status_while_seats_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db).seats(1).build().await?;

    let marked = TripRepository::new(db).mark_full_if_no_seats(trip.id).await?;

    assert!(!marked);

    Ok(())
}
