//! Role data repository.
//!
//! Roles are plain labels (`admin`, `employe`, `client`) linked to users through the
//! `user_role` join table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::role::Role;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Role::from_entity))
    }

    pub async fn find_by_label(&self, label: &str) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Label.eq(label))
            .one(self.db)
            .await?;

        Ok(entity.map(Role::from_entity))
    }

    pub async fn create(&self, label: String) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            label: ActiveValue::Set(label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(entity))
    }

    /// Returns the role with this label, creating it when missing.
    pub async fn get_or_create(&self, label: &str) -> Result<Role, DbErr> {
        match self.find_by_label(label).await? {
            Some(role) => Ok(role),
            None => self.create(label.to_string()).await,
        }
    }

    /// Renames a role.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Updated role
    /// - `Ok(None)` - No role with that ID
    pub async fn update(&self, id: i32, label: String) -> Result<Option<Role>, DbErr> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let entity = entity::role::ActiveModel {
            id: ActiveValue::Unchanged(id),
            label: ActiveValue::Set(label),
        }
        .update(self.db)
        .await?;

        Ok(Some(Role::from_entity(entity)))
    }

    /// Deletes a role and its user links.
    ///
    /// # Returns
    /// - `Ok(true)` - Role deleted
    /// - `Ok(false)` - No role with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::RoleId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Role::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Links a user to a role. Linking twice is a no-op.
    pub async fn assign(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .count(self.db)
            .await?;

        if existing == 0 {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role_id: ActiveValue::Set(role_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Labels of the roles held by a user, in role ID order.
    pub async fn labels_for_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let roles = entity::prelude::Role::find()
            .inner_join(entity::prelude::UserRole)
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(|r| r.label).collect())
    }

    /// Checks whether any user holds the given role.
    pub async fn any_user_has(&self, label: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .inner_join(entity::prelude::Role)
            .filter(entity::role::Column::Label.eq(label))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
