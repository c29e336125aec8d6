use super::*;

fn employee(email: &str) -> CreateEmployeeDto {
    CreateEmployeeDto {
        nom: Some("Durand".to_string()),
        prenom: Some("Paul".to_string()),
        email: Some(email.to_string()),
        password: Some("employee-pass".to_string()),
    }
}

/// Tests creating an employee account.
///
/// Expected: Ok(UserWithRoles) holding the employe role, neither driver nor passenger
#[tokio::test]
async fn creates_employee_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = AdminService::new(db)
        .create_employee(employee("paul@ecoride.test"))
        .await?;

    assert!(created.is_employee());
    assert!(!created.is_admin());
    assert!(!created.user.is_driver);
    assert!(!created.user.is_passenger);

    Ok(())
}

/// Tests creating an employee with an email in use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("paul@ecoride.test")
        .build()
        .await?;

    let result = AdminService::new(db)
        .create_employee(employee("paul@ecoride.test"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests bootstrapping the first admin.
///
/// Expected: admin_exists false before, true after create_admin
#[tokio::test]
async fn bootstraps_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AdminService::new(db);
    assert!(!service.admin_exists().await?);

    let admin = service
        .create_admin("admin@ecoride.test", "admin-pass")
        .await?;
    assert!(admin.is_admin());
    assert!(service.admin_exists().await?);

    Ok(())
}
