use super::*;

/// Tests approving a pending review.
///
/// Expected: Ok(Review) approved and listed for the driver
#[tokio::test]
async fn approves_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::create_user(db).await?;
    let pending = factory::review::ReviewFactory::new(db, trip.id, rider.id, driver.id)
        .build()
        .await?;

    let service = ReviewService::new(db);
    assert_eq!(service.pending().await?.len(), 1);

    let approved = service.moderate(pending.id, ReviewStatus::Approved).await?;
    assert_eq!(approved.status, ReviewStatus::Approved);

    assert!(service.pending().await?.is_empty());
    let visible = service.approved_for_driver(driver.id).await?;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, pending.id);

    Ok(())
}

/// Tests rejecting a review.
///
/// Expected: Ok(Review) rejected and hidden from the driver's reviews
#[tokio::test]
async fn rejects_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let rider = factory::user::create_user(db).await?;
    let pending = factory::review::ReviewFactory::new(db, trip.id, rider.id, driver.id)
        .build()
        .await?;

    let service = ReviewService::new(db);
    let rejected = service.moderate(pending.id, ReviewStatus::Rejected).await?;

    assert_eq!(rejected.status, ReviewStatus::Rejected);
    assert!(service.approved_for_driver(driver.id).await?.is_empty());

    Ok(())
}

/// Tests moderating an unknown review.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_review_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReviewService::new(db)
        .moderate(4242, ReviewStatus::Approved)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
