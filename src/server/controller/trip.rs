use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        trip::{
            BookingConfirmationDto, BookingResultDto, CancelResultDto, CreateTripDto,
            CreateTripResponseDto, MyTripDto, NoTripFoundDto, ParticipateQueryDto,
            SearchTripsQueryDto, TripDetailsDto, TripListItemDto, TripSearchResultDto,
            UpdateTripStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            booking::BookingOutcome,
            trip::{Trip, TripSearchOutcome, TripSearchParams, TripSearchResult},
        },
        service::trip::{BookingService, CancellationService, TripService},
        state::AppState,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "covoiturage";

/// List every trip.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Trips ordered by departure
#[utoipa::path(
    get,
    path = "/api/covoiturage",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "All trips", body = Vec<TripListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trips(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trips = TripService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(
            trips
                .into_iter()
                .map(Trip::into_list_item_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Search bookable trips on a route and date.
///
/// Optional filters narrow the results: `ecologique`, `prixMax`, `dureeMax` (minutes)
/// and `noteMin` (driver average).
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Matching trips
/// - `400 Bad Request` - Missing route or date, or malformed date
/// - `404 Not Found` - No match; the body carries the next available date, if any
#[utoipa::path(
    get,
    path = "/api/covoiturage/search",
    tag = TRIP_TAG,
    params(SearchTripsQueryDto),
    responses(
        (status = 200, description = "Matching trips", body = Vec<TripSearchResultDto>),
        (status = 400, description = "Missing or malformed parameter", body = ErrorDto),
        (status = 404, description = "No trip found", body = NoTripFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<SearchTripsQueryDto>,
) -> Result<Response, AppError> {
    let params = TripSearchParams::from_dto(query)?;

    let outcome = TripService::new(&state.db).search(params).await?;

    Ok(search_response(outcome))
}

/// Search with filters.
///
/// Accepts the same parameters as the search and returns the same responses; kept as
/// a separate path for clients that filter after a first search.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/covoiturage/filter",
    tag = TRIP_TAG,
    params(SearchTripsQueryDto),
    responses(
        (status = 200, description = "Matching trips", body = Vec<TripSearchResultDto>),
        (status = 400, description = "Missing or malformed parameter", body = ErrorDto),
        (status = 404, description = "No trip found", body = NoTripFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_trips(
    state: State<AppState>,
    query: Query<SearchTripsQueryDto>,
) -> Result<Response, AppError> {
    search_trips(state, query).await
}

fn search_response(outcome: TripSearchOutcome) -> Response {
    match outcome {
        TripSearchOutcome::Found(results) => (
            StatusCode::OK,
            Json(
                results
                    .into_iter()
                    .map(TripSearchResult::into_dto)
                    .collect::<Vec<_>>(),
            ),
        )
            .into_response(),
        TripSearchOutcome::Empty { next_date } => (
            StatusCode::NOT_FOUND,
            Json(NoTripFoundDto {
                message: "Aucun covoiturage trouvé".to_string(),
                prochain_covoiturage: next_date.map(|d| d.to_string()),
            }),
        )
            .into_response(),
    }
}

/// Get the details of a trip.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Trip with driver, vehicle, driver preferences and approved reviews
/// - `404 Not Found` - Unknown trip
#[utoipa::path(
    get,
    path = "/api/covoiturage/details/{id}",
    tag = TRIP_TAG,
    params(("id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip details", body = TripDetailsDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn trip_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = TripService::new(&state.db).details(id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// List the trips the caller participates in.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Trips with the caller's role, newest departure first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/covoiturage/mes-covoiturages",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "Caller's trips", body = Vec<MyTripDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn my_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let trips = TripService::new(&state.db)
        .trips_of_user(caller.user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            trips
                .into_iter()
                .map(|(trip, role)| trip.into_my_trip_dto(role))
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Publish a trip.
///
/// Costs the driver 2 credits. The trip, the driver's participation and the vehicle
/// link are created together or not at all.
///
/// # Access Control
/// - Authenticated user flagged as driver, owning the chosen vehicle
///
/// # Returns
/// - `201 Created` - Trip published
/// - `400 Bad Request` - Missing or inconsistent field, or no registered vehicle
/// - `401 Unauthorized` - Missing or invalid token
/// - `402 Payment Required` - Fewer than 2 credits
/// - `403 Forbidden` - Not a driver, or vehicle not owned
#[utoipa::path(
    post,
    path = "/api/covoiturage/creer",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Trip created", body = CreateTripResponseDto),
        (status = 400, description = "Invalid trip or no vehicle", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 402, description = "Insufficient credits", body = ErrorDto),
        (status = 403, description = "Not a driver or vehicle not owned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (trip, remaining) = TripService::new(&state.db)
        .create(&caller.user, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTripResponseDto {
            message: "Covoiturage créé avec succès".to_string(),
            covoiturage_id: trip.id,
            credits_restants: remaining,
        }),
    ))
}

/// Book a seat on a trip.
///
/// Without `confirm=1` nothing is written and the response asks for confirmation.
/// With it, 2 credits are debited and one seat is taken atomically.
///
/// # Access Control
/// - Authenticated user flagged as passenger
///
/// # Returns
/// - `200 OK` - Seat booked
/// - `202 Accepted` - Confirmation required
/// - `400 Bad Request` - No seat left or trip not bookable
/// - `401 Unauthorized` - Missing or invalid token
/// - `402 Payment Required` - Fewer than 2 credits
/// - `403 Forbidden` - Not a passenger
/// - `404 Not Found` - Unknown trip
/// - `409 Conflict` - Already booked
#[utoipa::path(
    post,
    path = "/api/covoiturage/{id}/participer",
    tag = TRIP_TAG,
    params(("id" = i32, Path, description = "Trip ID"), ParticipateQueryDto),
    responses(
        (status = 200, description = "Seat booked", body = BookingResultDto),
        (status = 202, description = "Confirmation required", body = BookingConfirmationDto),
        (status = 400, description = "No seat left", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 402, description = "Insufficient credits", body = ErrorDto),
        (status = 403, description = "Not a passenger", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn participate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(query): Query<ParticipateQueryDto>,
) -> Result<Response, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let confirm = query
        .confirm
        .as_deref()
        .is_some_and(|v| matches!(v.trim(), "1" | "true"));

    let outcome = BookingService::new(&state.db, state.documents.as_ref())
        .participate(&caller.user, id, confirm)
        .await?;

    Ok(match outcome {
        BookingOutcome::ConfirmationRequired { credits } => (
            StatusCode::ACCEPTED,
            Json(BookingOutcome::confirmation_dto(credits)),
        )
            .into_response(),
        BookingOutcome::Booked { remaining_credits } => (
            StatusCode::OK,
            Json(BookingOutcome::booked_dto(remaining_credits)),
        )
            .into_response(),
    })
}

/// Cancel a trip or a seat.
///
/// The driver cancels the whole trip: riders are refunded the seat price and
/// notified by mail, and the driver gets the 2-credit fee back. A rider cancels
/// their own seat and is refunded the seat price.
///
/// # Access Control
/// - Authenticated participant of the trip
///
/// # Returns
/// - `200 OK` - Cancelled
/// - `400 Bad Request` - Trip already cancelled or completed
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller does not participate in the trip
/// - `404 Not Found` - Unknown trip
#[utoipa::path(
    delete,
    path = "/api/covoiturage/{id}/annuler",
    tag = TRIP_TAG,
    params(("id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Cancelled", body = CancelResultDto),
        (status = 400, description = "Trip not cancellable", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let outcome = CancellationService::new(&state.db, &state.mail)
        .cancel(&caller.user, id)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Change the status of a trip.
///
/// Follows the transition table; cancelling goes through `annuler` instead.
///
/// # Access Control
/// - Driver of the trip
///
/// # Returns
/// - `200 OK` - Trip with its new status
/// - `400 Bad Request` - Missing or unknown status, or `annulé`
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not the driver
/// - `404 Not Found` - Unknown trip
/// - `409 Conflict` - Transition not allowed
#[utoipa::path(
    put,
    path = "/api/covoiturage/{id}/statut",
    tag = TRIP_TAG,
    params(("id" = i32, Path, description = "Trip ID")),
    request_body = UpdateTripStatusDto,
    responses(
        (status = 200, description = "Status updated", body = TripListItemDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the driver", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_trip_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTripStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let trip = TripService::new(&state.db)
        .update_status(caller.user.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(trip.into_list_item_dto())))
}
