//! Role factory for creating roles and linking them to users.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Creates a role with the given label, or returns the existing one.
///
/// # Arguments
/// - `db` - Database connection
/// - `label` - Role label such as `"admin"`, `"employe"` or `"client"`
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created or existing role
/// - `Err(DbErr)` - Database error
pub async fn create_role(
    db: &DatabaseConnection,
    label: &str,
) -> Result<entity::role::Model, DbErr> {
    if let Some(role) = entity::prelude::Role::find()
        .filter(entity::role::Column::Label.eq(label))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    entity::role::ActiveModel {
        label: ActiveValue::Set(label.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a role, creating the role when needed.
///
/// # Returns
/// - `Ok(entity::role::Model)` - The linked role
/// - `Err(DbErr)` - Database error
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: i32,
    label: &str,
) -> Result<entity::role::Model, DbErr> {
    let role = create_role(db, label).await?;

    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role.id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(role)
}
