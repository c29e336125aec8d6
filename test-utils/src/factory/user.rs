//! Member accounts for tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a `user` row; every column has a usable default.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let rider = UserFactory::new(&db)
///     .email("rider@example.com")
///     .credits(2)
///     .api_token_hash(hash_token("secret"))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    last_name: String,
    first_name: String,
    email: String,
    password_hash: String,
    pseudo: Option<String>,
    photo: Option<Vec<u8>>,
    api_token_hash: Option<String>,
    is_driver: bool,
    is_passenger: bool,
    credits: i32,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Defaults:
    /// - email: `"user{id}@ecoride.test"` where id is auto-incremented
    /// - pseudo: `"user{id}"`
    /// - passenger, not driver, active
    /// - credits: `20`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            last_name: format!("Nom{}", id),
            first_name: format!("Prenom{}", id),
            email: format!("user{}@ecoride.test", id),
            password_hash: "not-a-real-hash".to_string(),
            pseudo: Some(format!("user{}", id)),
            photo: None,
            api_token_hash: None,
            is_driver: false,
            is_passenger: true,
            credits: 20,
            is_active: true,
        }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash (already hashed by the caller).
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn pseudo(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudo = Some(pseudo.into());
        self
    }

    pub fn photo(mut self, photo: Vec<u8>) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Sets the stored API token hash (already hashed by the caller).
    pub fn api_token_hash(mut self, api_token_hash: impl Into<String>) -> Self {
        self.api_token_hash = Some(api_token_hash.into());
        self
    }

    pub fn driver(mut self, is_driver: bool) -> Self {
        self.is_driver = is_driver;
        self
    }

    pub fn passenger(mut self, is_passenger: bool) -> Self {
        self.is_passenger = is_passenger;
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            last_name: ActiveValue::Set(self.last_name),
            first_name: ActiveValue::Set(self.first_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            pseudo: ActiveValue::Set(self.pseudo),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            photo: ActiveValue::Set(self.photo),
            api_token_hash: ActiveValue::Set(self.api_token_hash),
            reset_token_hash: ActiveValue::Set(None),
            reset_token_expires_at: ActiveValue::Set(None),
            is_driver: ActiveValue::Set(self.is_driver),
            is_passenger: ActiveValue::Set(self.is_passenger),
            credits: ActiveValue::Set(self.credits),
            is_active: ActiveValue::Set(self.is_active),
            suspended_at: ActiveValue::Set(None),
            suspend_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Active passenger with 20 credits.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
