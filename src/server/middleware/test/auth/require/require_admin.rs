use super::*;

/// Tests a user holding the admin role.
///
/// Expected: Ok(UserWithRoles) with is_admin() true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("admin-token"))
        .build()
        .await?;
    factory::role::assign_role(db, user.id, "admin").await?;

    let headers = bearer("admin-token");
    let caller = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(caller.user.id, user.id);
    assert!(caller.is_admin());

    Ok(())
}

/// Tests that an employee is not an admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token_hash(hash_token("employee-token"))
        .build()
        .await?;
    factory::role::assign_role(db, user.id, "employe").await?;

    let headers = bearer("employee-token");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.err()),
    }

    Ok(())
}
