use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        brand::{BrandDto, BrandPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::brand::Brand,
        service::brand::BrandService,
        state::AppState,
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "marque";

/// List all vehicle brands.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/marque",
    tag = BRAND_TAG,
    responses(
        (status = 200, description = "All brands", body = Vec<BrandDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brands(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let brands = BrandService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(brands.into_iter().map(Brand::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a brand by ID.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/marque/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand", body = BrandDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brand = BrandService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Create a brand.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Brand created
/// - `400 Bad Request` - Label missing
/// - `409 Conflict` - Label already used
#[utoipa::path(
    post,
    path = "/api/marque",
    tag = BRAND_TAG,
    request_body = BrandPayloadDto,
    responses(
        (status = 201, description = "Brand created", body = BrandDto),
        (status = 400, description = "Label missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 409, description = "Label already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BrandPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let brand = BrandService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(brand.into_dto())))
}

/// Rename a brand.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/marque/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand ID")),
    request_body = BrandPayloadDto,
    responses(
        (status = 200, description = "Brand updated", body = BrandDto),
        (status = 400, description = "Label missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 409, description = "Label already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_brand(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<BrandPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let brand = BrandService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Delete a brand.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/marque/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    BrandService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
