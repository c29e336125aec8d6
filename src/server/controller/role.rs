use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        role::{RoleDto, RolePayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::role::Role,
        service::role::RoleService,
        state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "roles";

/// List all roles.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let roles = RoleService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(roles.into_iter().map(Role::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role", body = RoleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

/// Create a role. Labels are stored lowercase.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = RolePayloadDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Label missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 409, description = "Label already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RolePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    request_body = RolePayloadDto,
    responses(
        (status = 200, description = "Role updated", body = RoleDto),
        (status = 400, description = "Label missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Label already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<RolePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
