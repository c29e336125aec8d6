use super::*;

/// Tests suspending a user without a reason.
///
/// Expected: Ok, the account inactive with the default reason and no token
#[tokio::test]
async fn suspends_with_default_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash("some-hash")
        .build()
        .await?;

    AdminService::new(db).suspend(user.id, None).await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_active);
    assert!(stored.suspended_at.is_some());
    assert_eq!(
        stored.suspend_reason.as_deref(),
        Some("Suspension sans motif")
    );
    assert_eq!(stored.api_token_hash, None);

    Ok(())
}

/// Tests reactivating a suspended user.
///
/// Expected: Ok and the account active again
#[tokio::test]
async fn reactivates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = AdminService::new(db);
    service
        .suspend(user.id, Some("Comportement".to_string()))
        .await?;
    service.reactivate(user.id).await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_active);
    assert!(stored.suspended_at.is_none());

    Ok(())
}

/// Tests suspending an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminService::new(db).suspend(4242, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
