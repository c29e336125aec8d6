//! Outcomes of the booking and cancellation flows.

use crate::model::trip::{BookingConfirmationDto, BookingResultDto, CancelResultDto};

/// Credits charged to a rider for one seat, and to a driver for publishing a trip.
pub const PLATFORM_FEE: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Every check passed but the caller has not confirmed; nothing was written.
    ConfirmationRequired { credits: i32 },
    /// Seat booked; carries the rider's remaining credits.
    Booked { remaining_credits: i32 },
}

impl BookingOutcome {
    pub fn confirmation_dto(credits: i32) -> BookingConfirmationDto {
        BookingConfirmationDto {
            message: format!(
                "Confirmez la réservation : {} crédits seront débités",
                PLATFORM_FEE
            ),
            credits_requis: PLATFORM_FEE,
            credits_actuels: credits,
        }
    }

    pub fn booked_dto(remaining_credits: i32) -> BookingResultDto {
        BookingResultDto {
            message: "Participation confirmée".to_string(),
            credits_restants: remaining_credits,
        }
    }
}

/// Rider refunded by a driver cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundedRider {
    pub user_id: i32,
    pub email: String,
    pub name: String,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// The driver cancelled the whole trip.
    TripCancelled {
        refunded: Vec<RefundedRider>,
        remaining_credits: i32,
    },
    /// A rider gave back their seat.
    SeatReleased { remaining_credits: i32 },
}

impl CancelOutcome {
    pub fn into_dto(self) -> CancelResultDto {
        match self {
            Self::TripCancelled {
                remaining_credits, ..
            } => CancelResultDto {
                message: "Covoiturage annulé, les passagers ont été remboursés".to_string(),
                credits_restants: remaining_credits,
            },
            Self::SeatReleased { remaining_credits } => CancelResultDto {
                message: "Participation annulée".to_string(),
                credits_restants: remaining_credits,
            },
        }
    }
}
