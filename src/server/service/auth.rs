//! Account registration, login and password reset.
//!
//! Bearer tokens are 32 random bytes encoded as hex. Only the SHA-256 hash of a token
//! is stored, so a leaked database does not leak usable tokens. Logging in issues a
//! fresh token and thereby revokes the previous one.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::{LoginDto, RegisterDto, ResetPasswordConfirmDto, ResetPasswordDto},
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::{auth::AuthError, is_unique_violation, AppError},
        model::user::{
            CreateUserParams, NewAccount, UserWithRoles, ROLE_ADMIN, ROLE_CLIENT, ROLE_EMPLOYEE,
            STARTING_CREDITS,
        },
        service::{mail::MailService, user::UserService},
        util::{
            parse::required,
            password::{hash_password, verify_password},
            token::{generate_token, hash_token},
        },
    },
};

/// Validity of a password-reset link.
const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Account together with the clear-text token just issued to it.
#[derive(Debug)]
pub struct IssuedToken {
    pub account: UserWithRoles,
    pub token: String,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a client account and issues its first token.
    ///
    /// # Arguments
    /// - `dto` - Registration request; `role` may only be `client`
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Account created with 20 credits and the passenger flag
    /// - `Err(AppError::BadRequest)` - Missing field, malformed email or unknown role
    /// - `Err(AuthError::RoleNotAllowed)` - Requested role is `admin` or `employe`
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, dto: RegisterDto) -> Result<IssuedToken, AppError> {
        let role = required(dto.role.clone())
            .map(|r| r.to_lowercase())
            .unwrap_or_else(|| ROLE_CLIENT.to_string());
        let account = NewAccount::from_register_dto(dto)?;

        match role.as_str() {
            ROLE_CLIENT => {}
            ROLE_ADMIN | ROLE_EMPLOYEE => return Err(AuthError::RoleNotAllowed(role).into()),
            _ => return Err(AppError::BadRequest(format!("Rôle inconnu : {}", role))),
        }

        if UserRepository::new(self.db)
            .find_by_email(&account.email)
            .await?
            .is_some()
        {
            return Err(email_taken());
        }

        let password_hash = hash_password(&account.password)?;
        let token = generate_token();

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParams {
                last_name: account.last_name,
                first_name: account.first_name,
                email: account.email,
                password_hash,
                pseudo: account.pseudo,
                is_driver: false,
                is_passenger: true,
                credits: STARTING_CREDITS,
                api_token_hash: Some(hash_token(&token)),
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    email_taken()
                } else {
                    err.into()
                }
            })?;

        let roles = RoleRepository::new(&txn);
        let client = roles.get_or_create(ROLE_CLIENT).await?;
        roles.assign(user.id, client.id).await?;

        txn.commit().await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(IssuedToken {
            account: UserWithRoles {
                user,
                roles: vec![ROLE_CLIENT.to_string()],
            },
            token,
        })
    }

    /// Checks credentials and issues a fresh token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Credentials valid; the previous token is revoked
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::UnknownEmail)` - No account with that email
    /// - `Err(AuthError::AccountSuspended)` - Account suspended
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password
    /// - `Err(AuthError::AccessDenied)` - Account holds no role
    pub async fn login(&self, dto: LoginDto) -> Result<IssuedToken, AppError> {
        let (Some(email), Some(password)) = (required(dto.email), dto.password) else {
            return Err(AppError::BadRequest(
                "Email et mot de passe obligatoires".to_string(),
            ));
        };

        let users = UserRepository::new(self.db);
        let Some(user) = users.find_by_email(&email).await? else {
            return Err(AuthError::UnknownEmail(email).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountSuspended(user.id).into());
        }

        if !verify_password(&password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials(user.id).into());
        }

        let account = UserService::new(self.db).with_roles(user).await?;
        if account.roles.is_empty() {
            return Err(AuthError::AccessDenied(
                account.user.id,
                "account has no role".to_string(),
            )
            .into());
        }

        let token = generate_token();
        users
            .set_api_token_hash(account.user.id, Some(hash_token(&token)))
            .await?;

        Ok(IssuedToken { account, token })
    }

    /// Revokes the caller's token.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_api_token_hash(user_id, None)
            .await?;

        Ok(())
    }
}

/// Password reset by emailed link.
pub struct PasswordResetService<'a> {
    db: &'a DatabaseConnection,
    mail: &'a MailService,
    app_url: &'a str,
}

impl<'a> PasswordResetService<'a> {
    pub fn new(db: &'a DatabaseConnection, mail: &'a MailService, app_url: &'a str) -> Self {
        Self { db, mail, app_url }
    }

    /// Stores a one-hour reset token and mails the link to the user.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored; the mail is best effort
    /// - `Err(AppError::BadRequest)` - Email missing
    /// - `Err(AuthError::UnknownEmail)` - No account with that email
    pub async fn request(&self, dto: ResetPasswordDto) -> Result<(), AppError> {
        let Some(email) = required(dto.email) else {
            return Err(AppError::BadRequest("Email obligatoire".to_string()));
        };

        let users = UserRepository::new(self.db);
        let Some(user) = users.find_by_email(&email).await? else {
            return Err(AuthError::UnknownEmail(email).into());
        };

        let token = generate_token();
        users
            .set_reset_token(
                user.id,
                hash_token(&token),
                Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS),
            )
            .await?;

        let link = format!(
            "{}/reset-password?token={}",
            self.app_url.trim_end_matches('/'),
            token
        );
        self.mail
            .send_password_reset(&user.email, &user.display_name(), &link)
            .await;

        Ok(())
    }

    /// Sets a new password from a valid reset token.
    ///
    /// Clears the reset token and the API token, so existing sessions end.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Missing field, or unknown or expired token
    pub async fn confirm(&self, dto: ResetPasswordConfirmDto) -> Result<(), AppError> {
        let (Some(token), Some(password)) =
            (required(dto.token), dto.password.filter(|p| !p.is_empty()))
        else {
            return Err(AppError::BadRequest(
                "Jeton et nouveau mot de passe obligatoires".to_string(),
            ));
        };

        let users = UserRepository::new(self.db);
        let Some(user) = users
            .find_by_reset_token_hash(&hash_token(&token), Utc::now())
            .await?
        else {
            return Err(AppError::BadRequest(
                "Lien de réinitialisation invalide ou expiré".to_string(),
            ));
        };

        users
            .reset_password(user.id, hash_password(&password)?)
            .await?;

        tracing::info!("Password reset for user {}", user.id);

        Ok(())
    }
}

fn email_taken() -> AppError {
    AppError::Conflict("Cet email est déjà utilisé".to_string())
}
