//! Configuration factory for preference sets and their parameters.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty configuration owned by the user.
pub async fn create_configuration(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::configuration::Model, DbErr> {
    entity::configuration::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a key/value parameter to a configuration.
pub async fn create_parameter(
    db: &DatabaseConnection,
    configuration_id: i32,
    property: &str,
    value: &str,
) -> Result<entity::parameter::Model, DbErr> {
    entity::parameter::ActiveModel {
        configuration_id: ActiveValue::Set(configuration_id),
        property: ActiveValue::Set(property.to_string()),
        value: ActiveValue::Set(value.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
