use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        document::{
            BookingPageDto, BookingPageQueryDto, CollectionsDto, ReservationRecord,
            TripParticipantsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::history::HistoryService,
        state::AppState,
    },
};

/// Tag for grouping document-store endpoints in OpenAPI documentation
pub static HISTORY_TAG: &str = "mongo";

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 50;

/// List the non-empty collections of the document store.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/mongo/test",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Collection names", body = CollectionsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Document store unreachable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_collections(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let collections = HistoryService::new(&state.db, state.documents.as_ref())
        .collections()
        .await?;

    Ok((
        StatusCode::OK,
        Json(CollectionsDto {
            status: "success".to_string(),
            collections,
        }),
    ))
}

/// Page through booking records, newest first.
///
/// # Access Control
/// - `Employee`
///
/// # Returns
/// - `200 OK` - One page of records
/// - `400 Bad Request` - `page` or `limit` below 1, `limit` above 200, or `page` too large
#[utoipa::path(
    get,
    path = "/api/mongo/confirmation_covoiturage",
    tag = HISTORY_TAG,
    params(BookingPageQueryDto),
    responses(
        (status = 200, description = "Booking records", body = BookingPageDto),
        (status = 400, description = "Invalid page or limit", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Employee only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_confirmations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingPageQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Employee])
        .await?;

    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let data = HistoryService::new(&state.db, state.documents.as_ref())
        .confirmations(page, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingPageDto {
            page: page.unsigned_abs(),
            limit: limit.unsigned_abs(),
            data,
        }),
    ))
}

/// Booking records grouped per trip.
///
/// # Access Control
/// - `Employee`
#[utoipa::path(
    get,
    path = "/api/mongo/participations",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Bookings per trip", body = Vec<TripParticipantsDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Employee only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_participations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Employee])
        .await?;

    let grouped = HistoryService::new(&state.db, state.documents.as_ref())
        .participations_by_trip()
        .await?;

    Ok((StatusCode::OK, Json(grouped)))
}

/// Archive completed trips, then return the whole archive.
///
/// # Access Control
/// - `Employee`
#[utoipa::path(
    get,
    path = "/api/mongo/historique_covoiturage",
    tag = HISTORY_TAG,
    responses(
        (status = 200, description = "Archived trips", body = Vec<ReservationRecord>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Employee only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Employee])
        .await?;

    let history = HistoryService::new(&state.db, state.documents.as_ref())
        .history()
        .await?;

    Ok((StatusCode::OK, Json(history)))
}
