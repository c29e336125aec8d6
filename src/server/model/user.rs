//! User domain models and parameters.
//!
//! Provides the user model with its marketplace flags and credit balance, and the
//! parameter types used by registration, profile edits and employee creation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        admin::AdminUserDto,
        auth::RegisterDto,
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        util::parse::{decode_photo, encode_photo, is_valid_email, parse_date, required},
    },
};

/// Number of credits granted to every new account.
pub const STARTING_CREDITS: i32 = 20;

/// Role labels known to the application.
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EMPLOYEE: &str = "employe";
pub const ROLE_CLIENT: &str = "client";

/// Marketplace user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub pseudo: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub photo: Option<Vec<u8>>,
    /// May offer trips.
    pub is_driver: bool,
    /// May book seats.
    pub is_passenger: bool,
    pub credits: i32,
    /// False while suspended.
    pub is_active: bool,
    pub suspended_at: Option<DateTime<Utc>>,
    pub suspend_reason: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            last_name: entity.last_name,
            first_name: entity.first_name,
            email: entity.email,
            password_hash: entity.password_hash,
            pseudo: entity.pseudo,
            phone: entity.phone,
            address: entity.address,
            birth_date: entity.birth_date,
            photo: entity.photo,
            is_driver: entity.is_driver,
            is_passenger: entity.is_passenger,
            credits: entity.credits,
            is_active: entity.is_active,
            suspended_at: entity.suspended_at,
            suspend_reason: entity.suspend_reason,
        }
    }

    /// Name shown to other users: the pseudo, or the first name when unset.
    pub fn display_name(&self) -> String {
        self.pseudo
            .clone()
            .unwrap_or_else(|| self.first_name.clone())
    }
}

/// User together with the labels of their roles.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithRoles {
    pub user: User,
    pub roles: Vec<String>,
}

impl UserWithRoles {
    pub fn has_role(&self, label: &str) -> bool {
        self.roles.iter().any(|r| r == label)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Employees and admins may moderate.
    pub fn is_employee(&self) -> bool {
        self.has_role(ROLE_EMPLOYEE) || self.is_admin()
    }

    /// Role reported at login: the most privileged one held.
    pub fn primary_role(&self) -> Option<String> {
        [ROLE_ADMIN, ROLE_EMPLOYEE, ROLE_CLIENT]
            .into_iter()
            .find(|label| self.has_role(label))
            .map(str::to_string)
            .or_else(|| self.roles.first().cloned())
    }

    pub fn into_profile_dto(self) -> ProfileDto {
        let user = self.user;
        ProfileDto {
            id: user.id,
            nom: user.last_name,
            prenom: user.first_name,
            email: user.email,
            pseudo: user.pseudo,
            telephone: user.phone,
            adresse: user.address,
            date_naissance: user.birth_date.map(|d| d.to_string()),
            photo: user.photo.as_deref().map(encode_photo),
            credits: user.credits,
            is_chauffeur: user.is_driver,
            is_passager: user.is_passenger,
            roles: self.roles,
        }
    }

    pub fn into_admin_dto(self) -> AdminUserDto {
        AdminUserDto {
            id: self.user.id,
            nom: self.user.last_name,
            prenom: self.user.first_name,
            email: self.user.email,
            credits: self.user.credits,
            is_active: self.user.is_active,
            roles: self.roles,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub pseudo: Option<String>,
    pub is_driver: bool,
    pub is_passenger: bool,
    pub credits: i32,
    pub api_token_hash: Option<String>,
}

/// Validated account fields from a registration or employee-creation request.
///
/// The password is still in clear text; the service hashes it.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub pseudo: Option<String>,
}

impl NewAccount {
    /// Validates the mandatory account fields.
    ///
    /// # Returns
    /// - `Ok(NewAccount)` - All fields present and the email well formed
    /// - `Err(AppError::BadRequest)` - Missing field or malformed email
    pub fn from_fields(
        last_name: Option<String>,
        first_name: Option<String>,
        email: Option<String>,
        password: Option<String>,
        pseudo: Option<String>,
    ) -> Result<Self, AppError> {
        let (Some(last_name), Some(first_name), Some(email), Some(password)) = (
            required(last_name),
            required(first_name),
            required(email),
            password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Champs obligatoires manquants (nom, prenom, email, password)".to_string(),
            ));
        };

        let email = email.to_lowercase();
        if !is_valid_email(&email) {
            return Err(AppError::BadRequest("Adresse email invalide".to_string()));
        }

        Ok(Self {
            last_name,
            first_name,
            email,
            password,
            pseudo: required(pseudo),
        })
    }

    pub fn from_register_dto(dto: RegisterDto) -> Result<Self, AppError> {
        Self::from_fields(dto.nom, dto.prenom, dto.email, dto.password, dto.pseudo)
    }
}

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub pseudo: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub photo: Option<Vec<u8>>,
}

impl UpdateProfileParams {
    /// Converts the request, decoding the birth date and the base64 photo.
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        Ok(Self {
            pseudo: required(dto.pseudo),
            phone: required(dto.telephone),
            address: required(dto.adresse),
            birth_date: required(dto.date_naissance)
                .map(|d| parse_date(&d, "dateNaissance"))
                .transpose()?,
            photo: required(dto.photo)
                .map(|p| decode_photo(&p))
                .transpose()?,
        })
    }
}
