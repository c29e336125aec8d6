//! User service for business logic.
//!
//! This module provides the `UserService`, which resolves users together with their
//! role labels. The auth guard, the profile endpoints and the admin listing all go
//! through it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::AppError,
    model::user::{User, UserWithRoles},
};

/// Service providing user lookups with roles attached.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the role labels of an already fetched user.
    ///
    /// # Arguments
    /// - `user` - User domain model
    ///
    /// # Returns
    /// - `Ok(UserWithRoles)` - The user with its role labels
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn with_roles(&self, user: User) -> Result<UserWithRoles, AppError> {
        let roles = RoleRepository::new(self.db).labels_for_user(user.id).await?;

        Ok(UserWithRoles { user, roles })
    }

    /// Retrieves a user by ID with their roles.
    ///
    /// # Returns
    /// - `Ok(Some(UserWithRoles))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_with_roles(&self, user_id: i32) -> Result<Option<UserWithRoles>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(self.with_roles(user).await?))
    }

    /// Every user with their roles, ordered by ID.
    pub async fn get_all_with_roles(&self) -> Result<Vec<UserWithRoles>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            result.push(self.with_roles(user).await?);
        }

        Ok(result)
    }
}
