use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent with the request.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token does not match any user.
    #[error("Bearer token does not match any user")]
    InvalidToken,

    /// The account has been suspended by an administrator.
    #[error("User {0} is suspended")]
    AccountSuspended(i32),

    /// The user lacks a role or flag required by the endpoint.
    ///
    /// # Fields
    /// - ID of the user
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email.
    #[error("No user with email {0}")]
    UnknownEmail(String),

    /// Login with the wrong password.
    #[error("Invalid password for user {0}")]
    InvalidCredentials(i32),

    /// Registration asked for a privileged role.
    #[error("Registration with role '{0}' is not allowed")]
    RoleNotAllowed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `AccountSuspended` / `AccessDenied` / `RoleNotAllowed` → 403 Forbidden
/// - `UnknownEmail` → 404 Not Found
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentification requise".to_string(),
            ),
            Self::InvalidCredentials(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Identifiants invalides".to_string(),
            ),
            Self::AccountSuspended(_) => {
                error_response(StatusCode::FORBIDDEN, "Compte suspendu".to_string())
            }
            Self::AccessDenied(_, _) => {
                error_response(StatusCode::FORBIDDEN, "Accès refusé".to_string())
            }
            Self::RoleNotAllowed(_) => error_response(
                StatusCode::FORBIDDEN,
                "Ce rôle ne peut pas être choisi à l'inscription".to_string(),
            ),
            Self::UnknownEmail(_) => {
                error_response(StatusCode::NOT_FOUND, "Utilisateur introuvable".to_string())
            }
        }
    }
}
