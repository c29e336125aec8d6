use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UserWithRoles,
    service::user::UserService,
    util::token::hash_token,
};

pub enum Permission {
    /// Holds the `admin` role.
    Admin,
    /// Holds the `employe` or `admin` role.
    Employee,
    /// `is_driver` flag set.
    Driver,
    /// `is_passenger` flag set.
    Passenger,
}

/// Resolves the caller from an `Authorization: Bearer <token>` header and checks
/// their permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the caller and requires every listed permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must all hold; empty means any
    ///   authenticated, active user
    ///
    /// # Returns
    /// - `Ok(UserWithRoles)` - The authenticated caller
    /// - `Err(AuthError::MissingToken)` - No bearer token (401)
    /// - `Err(AuthError::InvalidToken)` - Token matches no user (401)
    /// - `Err(AuthError::AccountSuspended)` - Account suspended (403)
    /// - `Err(AuthError::AccessDenied)` - A permission is missing (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<UserWithRoles, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_token_hash(&hash_token(token))
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        if !user.is_active {
            return Err(AuthError::AccountSuspended(user.id).into());
        }

        let user = UserService::new(self.db).with_roles(user).await?;

        for permission in permissions {
            let (granted, missing) = match permission {
                Permission::Admin => (user.is_admin(), "admin role"),
                Permission::Employee => (user.is_employee(), "employee role"),
                Permission::Driver => (user.user.is_driver, "driver flag"),
                Permission::Passenger => (user.user.is_passenger, "passenger flag"),
            };

            if !granted {
                return Err(AuthError::AccessDenied(
                    user.user.id,
                    format!("User is missing the {}", missing),
                )
                .into());
            }
        }

        Ok(user)
    }
}

/// Extracts the token of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
