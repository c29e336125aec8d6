use super::*;

/// Tests a user with the driver flag.
///
/// Expected: Ok(UserWithRoles)
#[tokio::test]
async fn grants_access_to_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("driver-token"))
        .driver(true)
        .build()
        .await?;

    let headers = bearer("driver-token");
    let caller = AuthGuard::new(db, &headers)
        .require(&[Permission::Driver])
        .await?;

    assert!(caller.user.is_driver);

    Ok(())
}

/// Tests a passenger-only user asking for a driver operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_passenger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("rider-token"))
        .driver(false)
        .build()
        .await?;

    let headers = bearer("rider-token");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Driver])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
