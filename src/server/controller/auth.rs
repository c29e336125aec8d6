use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto, ResetPasswordConfirmDto,
            ResetPasswordDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::ROLE_CLIENT,
        service::auth::{AuthService, PasswordResetService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a client account.
///
/// Creates the account with 20 credits and the passenger flag, links it to the
/// `client` role and returns its first API token. The token is only shown once.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Account fields; `role` may only be `client`
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field, malformed email or unknown role
/// - `403 Forbidden` - Privileged role requested
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db).register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "Utilisateur créé avec succès".to_string(),
            email: issued.account.user.email,
            role: ROLE_CLIENT.to_string(),
            api_token: issued.token,
            credits: issued.account.user.credits,
        }),
    ))
}

/// Log in with email and password.
///
/// Issues a fresh API token, which revokes the previous one.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token issued
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Wrong password
/// - `403 Forbidden` - Account suspended or without role
/// - `404 Not Found` - Unknown email
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account suspended or without role", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db).login(payload).await?;
    let role = issued.account.primary_role().unwrap_or_default();

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            email: issued.account.user.email,
            api_token: issued.token,
            role,
        }),
    ))
}

/// Log out by revoking the caller's API token.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `204 No Content` - Token revoked
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    AuthService::new(&state.db).logout(caller.user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Request a password-reset link by email.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Link sent (delivery is best effort)
/// - `400 Bad Request` - Email missing
/// - `404 Not Found` - Unknown email
#[utoipa::path(
    post,
    path = "/api/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Reset link sent", body = MessageDto),
        (status = 400, description = "Email missing", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, &state.mail, &state.app_url)
        .request(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "Un lien de réinitialisation a été envoyé par email",
        )),
    ))
}

/// Set a new password with a reset token.
///
/// # Access Control
/// - Public (holder of a valid reset token)
///
/// # Returns
/// - `200 OK` - Password changed; the API token is revoked
/// - `400 Bad Request` - Missing field, or unknown or expired token
#[utoipa::path(
    post,
    path = "/api/reset-password/confirm",
    tag = AUTH_TAG,
    request_body = ResetPasswordConfirmDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password_confirm(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordConfirmDto>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, &state.mail, &state.app_url)
        .confirm(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Mot de passe mis à jour")),
    ))
}
