use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, vehicle::VehicleDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::vehicle::Vehicle,
        service::vehicle::VehicleService, state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "voitures";

/// List the caller's vehicles.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Vehicles with their brand
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - The caller has no vehicle
#[utoipa::path(
    get,
    path = "/api/voitures/utilisateur",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Caller's vehicles", body = Vec<VehicleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No vehicle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_vehicles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let vehicles = VehicleService::new(&state.db)
        .get_by_owner(caller.user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(vehicles.into_iter().map(Vehicle::into_dto).collect::<Vec<_>>()),
    ))
}

/// Delete one of the caller's vehicles.
///
/// # Access Control
/// - Owner of the vehicle
///
/// # Returns
/// - `204 No Content` - Vehicle deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown vehicle or owned by someone else
/// - `409 Conflict` - Vehicle assigned to a trip that is still open
#[utoipa::path(
    delete,
    path = "/api/voitures/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    VehicleService::new(&state.db)
        .delete(caller.user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
