use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::review::ReviewStatus;

use crate::{
    model::{
        api::{ErrorDto, StatusMessageDto},
        review::{CreateReviewDto, PendingReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::Review,
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review and moderation endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "avis";

/// Review the driver of a completed trip.
///
/// The review is stored pending until an employee moderates it.
///
/// # Access Control
/// - Authenticated passenger of the trip
///
/// # Returns
/// - `201 Created` - Review stored as `en_attente`
/// - `400 Bad Request` - Rating outside 1..=5, empty comment or trip not completed
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller was not a passenger of the trip
/// - `404 Not Found` - Unknown trip
/// - `409 Conflict` - Caller already reviewed this trip
#[utoipa::path(
    post,
    path = "/api/avis/covoiturage/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Trip ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid review or trip not completed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a passenger of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .create(caller.user.id, id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Approved reviews of a driver, newest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/avis/chauffeur/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Driver user ID")),
    responses(
        (status = 200, description = "Approved reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).approved_for_driver(id).await?;

    Ok((
        StatusCode::OK,
        Json(reviews.into_iter().map(Review::into_dto).collect::<Vec<_>>()),
    ))
}

/// Reviews awaiting moderation, each with its trip.
///
/// # Access Control
/// - `Employee`
#[utoipa::path(
    get,
    path = "/api/employe/dashboard-data",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Pending reviews", body = Vec<PendingReviewDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Employee only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_pending_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Employee])
        .await?;

    let pending = ReviewService::new(&state.db).pending().await?;

    Ok((
        StatusCode::OK,
        Json(
            pending
                .into_iter()
                .map(|(review, trip)| PendingReviewDto {
                    avis: review.into_dto(),
                    covoiturage: trip.into_list_item_dto(),
                })
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Approve a review, making it public.
///
/// # Access Control
/// - `Employee`
#[utoipa::path(
    post,
    path = "/api/employe/avis/{id}/approuver",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review approved", body = StatusMessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Employee only", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_review(
    state: State<AppState>,
    headers: HeaderMap,
    id: Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    moderate(state, headers, id, ReviewStatus::Approved, "Avis approuvé").await
}

/// Reject a review.
///
/// # Access Control
/// - `Employee`
#[utoipa::path(
    post,
    path = "/api/employe/avis/{id}/rejeter",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review rejected", body = StatusMessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Employee only", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn reject_review(
    state: State<AppState>,
    headers: HeaderMap,
    id: Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    moderate(state, headers, id, ReviewStatus::Rejected, "Avis rejeté").await
}

async fn moderate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    status: ReviewStatus,
    message: &str,
) -> Result<(StatusCode, Json<StatusMessageDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Employee])
        .await?;

    ReviewService::new(&state.db).moderate(id, status).await?;

    Ok((
        StatusCode::OK,
        Json(StatusMessageDto {
            status: "ok".to_string(),
            message: message.to_string(),
        }),
    ))
}
