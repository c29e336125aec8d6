//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records: creation,
//! lookups by email and token hash, profile edits, suspension, and the conditional
//! credit updates used by the booking and cancellation flows.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a database connection or transaction and provides
/// methods for creating, reading and updating user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Account fields with the already hashed password and token
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            last_name: ActiveValue::Set(params.last_name),
            first_name: ActiveValue::Set(params.first_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            pseudo: ActiveValue::Set(params.pseudo),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            photo: ActiveValue::Set(None),
            api_token_hash: ActiveValue::Set(params.api_token_hash),
            reset_token_hash: ActiveValue::Set(None),
            reset_token_expires_at: ActiveValue::Set(None),
            is_driver: ActiveValue::Set(params.is_driver),
            is_passenger: ActiveValue::Set(params.is_passenger),
            credits: ActiveValue::Set(params.credits),
            is_active: ActiveValue::Set(true),
            suspended_at: ActiveValue::Set(None),
            suspend_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email. Emails are stored lowercased.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user owning an API token.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex digest of the bearer token
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token belongs to this user
    /// - `Ok(None)` - Unknown or revoked token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ApiTokenHash.eq(token_hash))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user owning a password-reset token that has not expired yet.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex digest of the reset token
    /// - `now` - Reference time for the expiry check
    pub async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetTokenHash.eq(token_hash))
            .filter(entity::user::Column::ResetTokenExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Returns every user ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Replaces (or clears) the stored API token hash.
    ///
    /// Issuing a new hash revokes the previous token.
    pub async fn set_api_token_hash(
        &self,
        user_id: i32,
        token_hash: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::ApiTokenHash, Expr::value(token_hash))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stores a password-reset token hash and its expiry.
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            reset_token_hash: ActiveValue::Set(Some(token_hash)),
            reset_token_expires_at: ActiveValue::Set(Some(expires_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Sets a new password hash and revokes both the reset token and the API token.
    pub async fn reset_password(&self, user_id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            password_hash: ActiveValue::Set(password_hash),
            reset_token_hash: ActiveValue::Set(None),
            reset_token_expires_at: ActiveValue::Set(None),
            api_token_hash: ActiveValue::Set(None),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Applies a partial profile update.
    ///
    /// Only fields present in `params` are written.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that ID
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, DbErr> {
        let mut active = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            ..Default::default()
        };

        if let Some(pseudo) = params.pseudo {
            active.pseudo = ActiveValue::Set(Some(pseudo));
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(birth_date) = params.birth_date {
            active.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(photo) = params.photo {
            active.photo = ActiveValue::Set(Some(photo));
        }

        if !active.is_changed() {
            return self
                .find_by_id(user_id)
                .await?
                .ok_or(DbErr::RecordNotUpdated);
        }

        let entity = active.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Updates the driver and passenger flags. `None` keeps the current value.
    pub async fn set_flags(
        &self,
        user_id: i32,
        is_driver: Option<bool>,
        is_passenger: Option<bool>,
    ) -> Result<(), DbErr> {
        let mut active = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            ..Default::default()
        };

        if let Some(is_driver) = is_driver {
            active.is_driver = ActiveValue::Set(is_driver);
        }
        if let Some(is_passenger) = is_passenger {
            active.is_passenger = ActiveValue::Set(is_passenger);
        }

        if active.is_changed() {
            active.update(self.db).await?;
        }

        Ok(())
    }

    /// Suspends a user and revokes their API token.
    ///
    /// # Returns
    /// - `Ok(true)` - User suspended
    /// - `Ok(false)` - No user with that ID
    pub async fn suspend(&self, user_id: i32, reason: String) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, Expr::value(false))
            .col_expr(
                entity::user::Column::SuspendedAt,
                Expr::value(Some(Utc::now())),
            )
            .col_expr(entity::user::Column::SuspendReason, Expr::value(Some(reason)))
            .col_expr(
                entity::user::Column::ApiTokenHash,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lifts a suspension.
    ///
    /// # Returns
    /// - `Ok(true)` - User reactivated
    /// - `Ok(false)` - No user with that ID
    pub async fn reactivate(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, Expr::value(true))
            .col_expr(
                entity::user::Column::SuspendedAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .col_expr(
                entity::user::Column::SuspendReason,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Debits credits only if the balance covers the amount.
    ///
    /// Runs as a single `UPDATE ... WHERE credits >= amount`, so the balance can never
    /// go negative even under concurrent requests.
    ///
    /// # Returns
    /// - `Ok(true)` - Credits debited
    /// - `Ok(false)` - Balance too low (or unknown user); nothing written
    /// - `Err(DbErr)` - Database error during update
    pub async fn debit_credits(&self, user_id: i32, amount: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Credits,
                Expr::cust_with_values("credits - ?", [amount]),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::Credits.gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds credits to a balance.
    pub async fn credit_credits(&self, user_id: i32, amount: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Credits,
                Expr::cust_with_values("credits + ?", [amount]),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Reads the current balance.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Current balance
    /// - `Ok(None)` - No user with that ID
    pub async fn credits(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .select_only()
            .column(entity::user::Column::Credits)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Sum of all user balances.
    pub async fn total_credits(&self) -> Result<i64, DbErr> {
        let balances: Vec<i32> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Credits)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(balances.into_iter().map(i64::from).sum())
    }
}
