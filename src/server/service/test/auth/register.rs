use super::*;

/// Tests registering a client account.
///
/// Verifies the starting balance, the passenger flag, the client role and that
/// only the token hash is stored.
///
/// Expected: Ok(IssuedToken) with 20 credits and role client
#[tokio::test]
async fn registers_client_with_starting_credits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let issued = AuthService::new(db)
        .register(registration("Alice@Example.com"))
        .await?;

    assert_eq!(issued.account.user.email, "alice@example.com");
    assert_eq!(issued.account.user.credits, 20);
    assert!(issued.account.user.is_passenger);
    assert!(!issued.account.user.is_driver);
    assert_eq!(issued.account.roles, vec!["client".to_string()]);
    assert!(!issued.token.is_empty());

    let stored = entity::prelude::User::find_by_id(issued.account.user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.api_token_hash, Some(hash_token(&issued.token)));
    assert_ne!(stored.password_hash, "s3cret-pass");

    Ok(())
}

/// Tests registering an email already in use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = AuthService::new(db)
        .register(registration("taken@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests asking for a staff role at registration.
///
/// Expected: Err(AuthError::RoleNotAllowed)
#[tokio::test]
async fn rejects_staff_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .register(RegisterDto {
            role: Some("admin".to_string()),
            ..registration("bob@example.com")
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RoleNotAllowed(_)))
    ));

    Ok(())
}

/// Tests a registration with a missing mandatory field.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .register(RegisterDto {
            prenom: None,
            ..registration("carol@example.com")
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
