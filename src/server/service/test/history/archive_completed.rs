use super::*;

/// Tests archiving a completed trip with its participants.
///
/// Expected: Ok(1) on the first call, Ok(0) on the second
#[tokio::test]
async fn archives_completed_trips_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let driver = factory::user::UserFactory::new(db).driver(true).build().await?;
    let completed = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;
    factory::participation::create_driver(db, driver.id, completed.id).await?;
    let rider = factory::user::create_user(db).await?;
    factory::participation::create_passenger(db, rider.id, completed.id).await?;

    // Still open, not archived
    factory::trip::create_trip(db).await?;

    let service = HistoryService::new(db, &documents);
    assert_eq!(service.archive_completed().await?, 1);
    assert_eq!(service.archive_completed().await?, 0);

    let archive = documents.reservations().await?;
    assert_eq!(archive.len(), 1);
    assert_eq!(archive[0].covoiturage_id, completed.id);
    assert_eq!(archive[0].statut, "terminé");
    assert_eq!(archive[0].date_depart, "2030-01-15 09:00");
    assert_eq!(archive[0].participants.len(), 2);

    Ok(())
}

/// Tests that the history view archives pending trips first.
///
/// Expected: Ok with the completed trip in the archive
#[tokio::test]
async fn history_includes_newly_completed_trip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;

    let history = HistoryService::new(db, &documents).history().await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].covoiturage_id, trip.id);

    Ok(())
}

/// Tests two archive runs overlapping, as when the cron tick meets the history
/// endpoint.
///
/// Expected: one archived document for the trip
#[tokio::test]
async fn overlapping_runs_archive_trip_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    let trip = factory::trip::TripFactory::new(db)
        .status(TripStatus::Completed)
        .build()
        .await?;

    let cron = HistoryService::new(db, &documents);
    let endpoint = HistoryService::new(db, &documents);
    let (first, second) = tokio::join!(cron.archive_completed(), endpoint.archive_completed());
    first?;
    second?;

    let archive = documents.reservations().await?;
    assert_eq!(archive.len(), 1);
    assert_eq!(archive[0].covoiturage_id, trip.id);

    Ok(())
}
