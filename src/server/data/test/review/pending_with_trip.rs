use super::*;

/// Tests listing reviews awaiting moderation with their trip.
///
/// Expected: Ok with only the pending review
#[tokio::test]
async fn lists_pending_reviews_with_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    let author = factory::user::create_user(db).await?;
    let pending = factory::review::ReviewFactory::new(db, trip.id, author.id, driver.id)
        .build()
        .await?;
    let other = factory::user::create_user(db).await?;
    factory::review::ReviewFactory::new(db, trip.id, other.id, driver.id)
        .status(ReviewStatus::Approved)
        .build()
        .await?;

    let reviews = ReviewRepository::new(db).pending_with_trip().await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].0.id, pending.id);
    assert_eq!(reviews[0].1.id, trip.id);

    Ok(())
}
