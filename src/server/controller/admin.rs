use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AdminUserDto, CreateEmployeeDto, StatsDto, SuspendUserDto},
        api::{ErrorDto, MessageDto},
        profile::ProfileDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::UserWithRoles,
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List every user with their roles.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - All users
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/admin/utilisateurs",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<AdminUserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = AdminService::new(&state.db).get_users().await?;

    Ok((
        StatusCode::OK,
        Json(
            users
                .into_iter()
                .map(UserWithRoles::into_admin_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Suspend a user.
///
/// The account is deactivated and its API token revoked. Without `raison` the
/// reason recorded is `Suspension sans motif`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - User suspended
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Unknown user
#[utoipa::path(
    post,
    path = "/api/admin/utilisateur/suspend/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body(content = SuspendUserDto, description = "Optional suspension reason"),
    responses(
        (status = 200, description = "User suspended", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn suspend_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<SuspendUserDto>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let reason = payload.and_then(|Json(dto)| dto.raison);

    AdminService::new(&state.db).suspend(id, reason).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Utilisateur suspendu")),
    ))
}

/// Reactivate a suspended user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/utilisateur/reactivate/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User reactivated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn reactivate_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    AdminService::new(&state.db).reactivate(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Utilisateur réactivé")),
    ))
}

/// Create an employee account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Employee created with the `employe` role
/// - `400 Bad Request` - Missing field or malformed email
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/admin/employes",
    tag = ADMIN_TAG,
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = ProfileDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEmployeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let employee = AdminService::new(&state.db).create_employee(payload).await?;

    Ok((StatusCode::CREATED, Json(employee.into_profile_dto())))
}

/// Platform statistics per departure day.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Trips and platform credits per day, plus the sum of all balances
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Statistics", body = StatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
