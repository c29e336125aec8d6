use super::*;

/// Tests resolving the vehicle a trip uses.
///
/// Expected: Ok(Some(vehicle)) for a linked trip, Ok(None) otherwise
#[tokio::test]
async fn finds_linked_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let unlinked = factory::trip::create_trip(db).await?;

    let repo = VehicleRepository::new(db);

    assert_eq!(
        repo.find_for_trip(trip.id).await?.map(|v| v.id),
        Some(vehicle.id)
    );
    assert!(repo.find_for_trip(unlinked.id).await?.is_none());

    Ok(())
}
