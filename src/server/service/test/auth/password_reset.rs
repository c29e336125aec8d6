use super::*;

/// Tests setting a new password from a valid reset token.
///
/// Expected: Ok and login succeeds with the new password only
#[tokio::test]
async fn confirms_reset_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = MailService::disabled();

    let auth = AuthService::new(db);
    let registered = auth.register(registration("hugo@example.com")).await?;
    UserRepository::new(db)
        .set_reset_token(
            registered.account.user.id,
            hash_token("reset-token"),
            Utc::now() + Duration::hours(1),
        )
        .await?;

    PasswordResetService::new(db, &mail, "http://localhost")
        .confirm(ResetPasswordConfirmDto {
            token: Some("reset-token".to_string()),
            password: Some("n3w-pass".to_string()),
        })
        .await?;

    assert!(auth
        .login(credentials("hugo@example.com", "n3w-pass"))
        .await
        .is_ok());
    assert!(auth
        .login(credentials("hugo@example.com", "s3cret-pass"))
        .await
        .is_err());

    Ok(())
}

/// Tests an expired reset token.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = MailService::disabled();

    let user = factory::user::create_user(db).await?;
    UserRepository::new(db)
        .set_reset_token(
            user.id,
            hash_token("old-token"),
            Utc::now() - Duration::minutes(5),
        )
        .await?;

    let result = PasswordResetService::new(db, &mail, "http://localhost")
        .confirm(ResetPasswordConfirmDto {
            token: Some("old-token".to_string()),
            password: Some("whatever".to_string()),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests requesting a reset for an unknown email.
///
/// Expected: Err(AuthError::UnknownEmail)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = MailService::disabled();

    let result = PasswordResetService::new(db, &mail, "http://localhost")
        .request(ResetPasswordDto {
            email: Some("ghost@example.com".to_string()),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownEmail(_)))
    ));

    Ok(())
}

/// Tests requesting a reset for a known email.
///
/// Expected: Ok and a reset token hash stored
#[tokio::test]
async fn stores_reset_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mail = MailService::disabled();

    let user = factory::user::UserFactory::new(db)
        .email("ines@example.com")
        .build()
        .await?;

    PasswordResetService::new(db, &mail, "http://localhost")
        .request(ResetPasswordDto {
            email: Some("ines@example.com".to_string()),
        })
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.reset_token_hash.is_some());
    assert!(stored.reset_token_expires_at.is_some_and(|t| t > Utc::now()));

    Ok(())
}
