//! Participation factory linking users to trips.

use chrono::Utc;
use entity::participation::ParticipationRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a participation row with the given role.
pub async fn create_participation(
    db: &DatabaseConnection,
    user_id: i32,
    trip_id: i32,
    role: ParticipationRole,
) -> Result<entity::participation::Model, DbErr> {
    entity::participation::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        trip_id: ActiveValue::Set(trip_id),
        role: ActiveValue::Set(role),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Makes the user the driver of the trip.
pub async fn create_driver(
    db: &DatabaseConnection,
    user_id: i32,
    trip_id: i32,
) -> Result<entity::participation::Model, DbErr> {
    create_participation(db, user_id, trip_id, ParticipationRole::Driver).await
}

/// Books the user onto the trip without touching credits or seats.
pub async fn create_passenger(
    db: &DatabaseConnection,
    user_id: i32,
    trip_id: i32,
) -> Result<entity::participation::Model, DbErr> {
    create_participation(db, user_id, trip_id, ParticipationRole::Passenger).await
}
