use super::*;

mod require_admin;
mod require_driver;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header that is not a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a bearer token matching no user.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("known-token"))
        .build()
        .await?;

    let headers = bearer("other-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token belonging to a suspended account.
///
/// Expected: Err(AuthError::AccountSuspended) with the user's id
#[tokio::test]
async fn rejects_suspended_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("suspended-token"))
        .active(false)
        .build()
        .await?;

    let headers = bearer("suspended-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountSuspended(user_id))) => {
            assert_eq!(user_id, user.id);
        }
        other => panic!("Expected AccountSuspended error, got: {:?}", other.err()),
    }

    Ok(())
}

/// Tests an empty permission list with a valid token.
///
/// Verifies that any active user is resolved together with their roles.
///
/// Expected: Ok(UserWithRoles)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("client-token"))
        .build()
        .await?;
    factory::role::assign_role(db, user.id, "client").await?;

    let headers = bearer("client-token");
    let caller = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(caller.user.id, user.id);
    assert_eq!(caller.roles, vec!["client".to_string()]);

    Ok(())
}

/// Tests that every listed permission is checked.
///
/// Expected: Err(AuthError::AccessDenied) when the second permission is missing
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("rider-token"))
        .passenger(true)
        .driver(false)
        .build()
        .await?;

    let headers = bearer("rider-token");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Passenger, Permission::Driver])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("driver"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.err()),
    }

    Ok(())
}
