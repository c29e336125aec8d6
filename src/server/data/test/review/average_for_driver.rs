use super::*;

/// Tests that the driver average only counts approved reviews.
///
/// Expected: Ok(Some(average of approved ratings))
#[tokio::test]
async fn averages_approved_reviews_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (driver, _, trip) = factory::helpers::create_trip_with_driver(db).await?;
    for (rating, status) in [
        (5, ReviewStatus::Approved),
        (4, ReviewStatus::Approved),
        (1, ReviewStatus::Pending),
        (1, ReviewStatus::Rejected),
    ] {
        let author = factory::user::create_user(db).await?;
        factory::review::ReviewFactory::new(db, trip.id, author.id, driver.id)
            .rating(rating)
            .status(status)
            .build()
            .await?;
    }

    let average = ReviewRepository::new(db)
        .average_for_driver(driver.id)
        .await?;

    assert_eq!(average, Some(4.5));

    Ok(())
}

/// Tests a driver without approved reviews.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let driver = factory::user::create_user(db).await?;

    let average = ReviewRepository::new(db)
        .average_for_driver(driver.id)
        .await?;

    assert!(average.is_none());

    Ok(())
}
