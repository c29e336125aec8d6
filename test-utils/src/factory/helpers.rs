//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a driver, their vehicle and a trip they drive.
///
/// The driver is flagged as driver and passenger, the trip uses the vehicle
/// through a usage link, and the driver holds the driver participation.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((driver, vehicle, trip))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_driver(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::trip::Model,
    ),
    DbErr,
> {
    let driver = crate::factory::user::UserFactory::new(db)
        .driver(true)
        .build()
        .await?;
    let (vehicle, trip) = create_trip_for_driver(db, &driver).await?;

    Ok((driver, vehicle, trip))
}

/// Creates a vehicle and a trip driven by an existing user.
///
/// # Arguments
/// - `db` - Database connection
/// - `driver` - User entity to use as the driver
///
/// # Returns
/// - `Ok((vehicle, trip))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_for_driver(
    db: &DatabaseConnection,
    driver: &entity::user::Model,
) -> Result<(entity::vehicle::Model, entity::trip::Model), DbErr> {
    let vehicle = crate::factory::vehicle::create_vehicle(db, driver.id).await?;
    let trip = crate::factory::trip::TripFactory::new(db)
        .vehicle_id(vehicle.id)
        .build()
        .await?;
    crate::factory::participation::create_driver(db, driver.id, trip.id).await?;

    Ok((vehicle, trip))
}
