use super::*;

/// Tests grouping booking records per trip.
///
/// Expected: Ok with one group per trip, ordered by trip ID, riders as passager
#[tokio::test]
async fn groups_bookings_per_trip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let documents = MemoryDocumentStore::new();

    documents
        .insert_booking(booking(1, 20, "2030-01-01T08:00:00.000000Z"))
        .await?;
    documents
        .insert_booking(booking(2, 10, "2030-01-02T08:00:00.000000Z"))
        .await?;
    documents
        .insert_booking(booking(3, 20, "2030-01-03T08:00:00.000000Z"))
        .await?;

    let groups = HistoryService::new(db, &documents)
        .participations_by_trip()
        .await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].covoiturage_id, 10);
    assert_eq!(groups[0].participants.len(), 1);
    assert_eq!(groups[1].covoiturage_id, 20);
    assert_eq!(groups[1].participants.len(), 2);
    assert_eq!(groups[1].participants[0].name, "Prenom1 Nom1");
    assert!(groups[1].participants.iter().all(|p| p.role == "passager"));

    Ok(())
}
