use super::*;

fn driver_request(plate: &str) -> RegisterDriverDto {
    RegisterDriverDto {
        voiture: Some(DriverVehicleDto {
            immatriculation: Some(plate.to_string()),
            modele: Some("Zoe".to_string()),
            couleur: Some("Bleu".to_string()),
            energie: Some("électrique".to_string()),
            date_premiere_immatriculation: Some("2021-05-10".to_string()),
        }),
        marque: Some("Renault".to_string()),
        preferences: vec![ParameterInputDto {
            propriete: "animaux".to_string(),
            valeur: "non".to_string(),
        }],
    }
}

/// Tests registering as a driver.
///
/// Verifies that the vehicle, the brand, the preferences and the driver flag are
/// all written.
///
/// Expected: Ok(Vehicle) and the user flagged as driver
#[tokio::test]
async fn registers_vehicle_and_sets_driver_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let vehicle = ProfileService::new(db)
        .register_driver(user.id, driver_request("ab-123-cd"))
        .await?;

    assert_eq!(vehicle.owner_id, user.id);
    assert_eq!(vehicle.plate, "AB-123-CD");

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_driver);
    assert!(stored.is_passenger);

    let brands = entity::prelude::Brand::find().all(db).await?;
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0].label, "Renault");

    let preferences = ConfigurationRepository::new(db)
        .preferences_of(user.id)
        .await?;
    assert_eq!(preferences.len(), 1);
    assert_eq!(preferences[0].property, "animaux");
    assert_eq!(preferences[0].value, "non");

    Ok(())
}

/// Tests registering a plate that is already taken.
///
/// Expected: Err(AppError::Conflict) and the user not flagged as driver
#[tokio::test]
async fn rejects_taken_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::vehicle::VehicleFactory::new(db, owner.id)
        .plate("AB-123-CD")
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;

    let result = ProfileService::new(db)
        .register_driver(user.id, driver_request("AB-123-CD"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_driver);

    Ok(())
}

/// Tests a request without vehicle details.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = ProfileService::new(db)
        .register_driver(
            user.id,
            RegisterDriverDto {
                voiture: None,
                ..driver_request("XY-999-ZZ")
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
