use super::*;

/// Tests a user changing their own flags.
///
/// Expected: Ok(UserWithRoles) with the new flags
#[tokio::test]
async fn user_sets_own_flags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jade@ecoride.test")
        .build()
        .await?;

    let updated = ProfileService::new(db)
        .set_status(
            &caller(user, &["client"]),
            UpdateStatusDto {
                email: Some("Jade@Ecoride.test".to_string()),
                is_chauffeur: Some(true),
                is_passager: None,
            },
        )
        .await?;

    assert!(updated.user.is_driver);
    assert!(updated.user.is_passenger);

    Ok(())
}

/// Tests a client changing another user's flags.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn client_cannot_change_someone_else() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .email("target@ecoride.test")
        .build()
        .await?;

    let result = ProfileService::new(db)
        .set_status(
            &caller(user, &["client"]),
            UpdateStatusDto {
                email: Some("target@ecoride.test".to_string()),
                is_chauffeur: Some(true),
                is_passager: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin changing another user's flags.
///
/// Expected: Ok(UserWithRoles) for the target
#[tokio::test]
async fn admin_changes_someone_else() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .email("target@ecoride.test")
        .build()
        .await?;

    let updated = ProfileService::new(db)
        .set_status(
            &caller(admin, &["admin"]),
            UpdateStatusDto {
                email: Some("target@ecoride.test".to_string()),
                is_chauffeur: None,
                is_passager: Some(false),
            },
        )
        .await?;

    assert_eq!(updated.user.id, target.id);
    assert!(!updated.user.is_passenger);

    Ok(())
}
