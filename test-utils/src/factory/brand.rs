//! Brand factory for creating vehicle brands.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a brand named `"Brand {id}"`.
pub async fn create_brand(db: &DatabaseConnection) -> Result<entity::brand::Model, DbErr> {
    create_brand_with_label(db, format!("Brand {}", next_id())).await
}

/// Creates a brand with a specific label.
pub async fn create_brand_with_label(
    db: &DatabaseConnection,
    label: impl Into<String>,
) -> Result<entity::brand::Model, DbErr> {
    entity::brand::ActiveModel {
        label: ActiveValue::Set(label.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
