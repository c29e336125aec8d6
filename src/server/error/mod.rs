//! Marketplace errors and their JSON rendering.
//!
//! Every failure leaves the API as `{"message": ...}`. Sub-modules hold the
//! auth, trip, config and internal-state families.

pub mod auth;
pub mod config;
pub mod internal;
pub mod trip;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError, trip::TripError},
        store::StoreError,
    },
};

/// Error returned by every handler, service and repository of the marketplace.
///
/// Auth and trip rejections render themselves; the remaining variants map to a fixed
/// status with an `ErrorDto { message }` body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable at boot. 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Bearer token, login or role failure. See `AuthError` for statuses.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejection from one of the trip rule flows (booking, cancellation, creation).
    #[error(transparent)]
    TripErr(#[from] TripError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Booking record or archive write failed. 500.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Row state the rules should have made impossible, e.g. a trip with no driver.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// 404 with the message as body.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the message as body.
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate email, pseudo, label or plate. 409.
    #[error("{0}")]
    Conflict(String),

    /// 500; the message is logged and the client only sees a generic body.
    #[error("{0}")]
    InternalError(String),
}

/// Status mapping:
/// - `BadRequest` 400, `NotFound` 404, `Conflict` 409
/// - `AuthErr` and `TripErr` pick their own status
/// - everything else logs the cause and answers 500
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::TripErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { message })).into_response()
}

/// Logs `E` and answers 500 with a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

/// Returns true when a database error is a unique constraint violation.
///
/// Used to turn races on unique indexes (double booking, duplicate email) into
/// 409 responses instead of 500s.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
