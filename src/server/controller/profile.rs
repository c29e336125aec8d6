use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile::{
            ProfileDto, RegisterDriverDto, RegisterDriverResponseDto, UpdateProfileDto,
            UpdateStatusDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the caller's profile.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Profile with credits, flags and roles
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = ProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(caller.into_profile_dto())))
}

/// Update the caller's profile. Absent fields are kept.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Malformed birth date or photo
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/profile/me",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Malformed field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let profile = ProfileService::new(&state.db)
        .update(caller.user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_profile_dto())))
}

/// Set the driver and passenger flags of a user.
///
/// # Access Control
/// - The user themselves, or `Admin`
///
/// # Returns
/// - `200 OK` - Profile with the new flags
/// - `400 Bad Request` - Email missing
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the target nor an admin
/// - `404 Not Found` - Unknown email
#[utoipa::path(
    post,
    path = "/api/profile/status",
    tag = PROFILE_TAG,
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Flags updated", body = ProfileDto),
        (status = 400, description = "Email missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let target = ProfileService::new(&state.db)
        .set_status(&caller, payload)
        .await?;

    Ok((StatusCode::OK, Json(target.into_profile_dto())))
}

/// Register the caller as a driver.
///
/// Stores the vehicle (creating its brand when unknown), appends the driving
/// preferences to the caller's configuration and sets the driver flag.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `201 Created` - Caller is now a driver
/// - `400 Bad Request` - Missing vehicle field or brand
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Plate already registered
#[utoipa::path(
    post,
    path = "/api/profile/register-chauffeur",
    tag = PROFILE_TAG,
    request_body = RegisterDriverDto,
    responses(
        (status = 201, description = "Driver registered", body = RegisterDriverResponseDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Plate already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn register_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let vehicle = ProfileService::new(&state.db)
        .register_driver(caller.user.id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterDriverResponseDto {
            message: "Vous êtes maintenant chauffeur".to_string(),
            voiture_id: vehicle.id,
        }),
    ))
}
