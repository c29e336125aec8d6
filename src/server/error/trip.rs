use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::trip::TripStatus;
use thiserror::Error;

use crate::server::error::error_response;

/// Rejections raised by the booking, cancellation and trip-creation rules.
///
/// Every variant is raised before any mutation is committed; when raised inside a
/// transaction the transaction is rolled back.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Trip {0} not found")]
    NotFound(i32),

    /// The caller's `is_passenger` flag is off.
    #[error("User {0} is not a passenger")]
    NotPassenger(i32),

    /// Only riders of a trip may review its driver.
    #[error("User {user_id} did not ride on trip {trip_id}")]
    NotTripPassenger { user_id: i32, trip_id: i32 },

    /// The caller's `is_driver` flag is off.
    #[error("User {0} is not a driver")]
    NotDriver(i32),

    #[error("User {user_id} already participates in trip {trip_id}")]
    AlreadyBooked { user_id: i32, trip_id: i32 },

    #[error("Trip {0} has no seat left")]
    NoSeatsLeft(i32),

    /// Trip is full, cancelled or completed.
    #[error("Trip {trip_id} does not accept bookings while {}", .status.label())]
    NotBookable { trip_id: i32, status: TripStatus },

    #[error("Insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: i32, available: i32 },

    #[error("User {0} has no registered vehicle")]
    NoVehicle(i32),

    #[error("Vehicle {vehicle_id} is not owned by user {user_id}")]
    VehicleNotOwned { user_id: i32, vehicle_id: i32 },

    /// Only the trip's driver may change its status.
    #[error("User {user_id} is not the driver of trip {trip_id}")]
    NotTripDriver { user_id: i32, trip_id: i32 },

    /// Caller is neither the driver nor a rider of the trip.
    #[error("User {user_id} cannot cancel trip {trip_id}")]
    CancelNotAllowed { user_id: i32, trip_id: i32 },

    /// Trip is already cancelled or completed.
    #[error("Trip {trip_id} cannot be cancelled while {}", .status.label())]
    NotCancellable { trip_id: i32, status: TripStatus },

    #[error("Transition from {} to {} is not allowed", .from.label(), .to.label())]
    InvalidTransition { from: TripStatus, to: TripStatus },
}

/// Converts trip rule rejections into HTTP responses.
///
/// - `NotFound` → 404
/// - `NotPassenger` / `NotTripPassenger` / `NotDriver` / `NotTripDriver` / `VehicleNotOwned` / `CancelNotAllowed` → 403
/// - `AlreadyBooked` / `InvalidTransition` → 409
/// - `NoSeatsLeft` / `NotBookable` / `NoVehicle` / `NotCancellable` → 400
/// - `InsufficientCredits` → 402
impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotPassenger(_)
            | Self::NotTripPassenger { .. }
            | Self::NotDriver(_)
            | Self::NotTripDriver { .. }
            | Self::VehicleNotOwned { .. }
            | Self::CancelNotAllowed { .. } => StatusCode::FORBIDDEN,
            Self::AlreadyBooked { .. } | Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::NoSeatsLeft(_)
            | Self::NotBookable { .. }
            | Self::NoVehicle(_)
            | Self::NotCancellable { .. } => StatusCode::BAD_REQUEST,
            Self::InsufficientCredits { .. } => StatusCode::PAYMENT_REQUIRED,
        };

        let message = match &self {
            Self::NotFound(_) => "Covoiturage introuvable".to_string(),
            Self::NotPassenger(_) => "Vous devez être passager pour réserver".to_string(),
            Self::NotTripPassenger { .. } => {
                "Seuls les passagers de ce covoiturage peuvent laisser un avis".to_string()
            }
            Self::NotDriver(_) => "Vous devez être chauffeur pour créer un trajet".to_string(),
            Self::AlreadyBooked { .. } => "Vous participez déjà à ce covoiturage".to_string(),
            Self::NoSeatsLeft(_) => "Plus de places disponibles".to_string(),
            Self::NotBookable { status, .. } => {
                format!("Ce covoiturage n'est plus réservable ({})", status.label())
            }
            Self::InsufficientCredits { required, .. } => {
                format!("Crédits insuffisants ({} requis)", required)
            }
            Self::NoVehicle(_) => "Aucun véhicule enregistré".to_string(),
            Self::NotTripDriver { .. } => {
                "Seul le chauffeur peut modifier le statut du covoiturage".to_string()
            }
            Self::VehicleNotOwned { .. } => "Ce véhicule ne vous appartient pas".to_string(),
            Self::CancelNotAllowed { .. } => {
                "Vous n'êtes pas autorisé à annuler ce covoiturage".to_string()
            }
            Self::NotCancellable { status, .. } => {
                format!("Impossible d'annuler un covoiturage {}", status.label())
            }
            Self::InvalidTransition { from, to } => format!(
                "Transition de statut interdite : {} → {}",
                from.label(),
                to.label()
            ),
        };

        error_response(status, message)
    }
}
