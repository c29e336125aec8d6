//! Seat booking.

use chrono::{SecondsFormat, Utc};
use entity::participation::ParticipationRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::document::{BookingRecord, BookingTripSnapshot, BookingUserSnapshot},
    server::{
        data::{
            participation::ParticipationRepository, trip::TripRepository, user::UserRepository,
        },
        error::{is_unique_violation, trip::TripError, AppError},
        model::{
            booking::{BookingOutcome, PLATFORM_FEE},
            trip::Trip,
            user::User,
        },
        store::DocumentStore,
        util::parse::format_time,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    documents: &'a dyn DocumentStore,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, documents: &'a dyn DocumentStore) -> Self {
        Self { db, documents }
    }

    /// Books one seat on a trip for 2 credits.
    ///
    /// Checks run in this order, each failing without any write: passenger flag, trip
    /// exists, no existing participation, seat left and bookable status, balance of
    /// at least 2 credits. Without `confirm` the call stops there and reports the cost.
    ///
    /// With `confirm`, the seat decrement, the credit debit and the participation
    /// insert run in one transaction. The seat and credit updates are conditional, so
    /// a concurrent booking that took the last seat or spent the credits in between
    /// rolls this one back with the matching error. The booking record is mirrored to
    /// the document store after commit; a mirror failure is logged only.
    ///
    /// # Arguments
    /// - `rider` - Authenticated caller
    /// - `trip_id` - Trip to book
    /// - `confirm` - Whether the caller confirmed the debit
    ///
    /// # Returns
    /// - `Ok(BookingOutcome::ConfirmationRequired)` - Checks passed, nothing written
    /// - `Ok(BookingOutcome::Booked)` - Seat booked; carries the remaining credits
    /// - `Err(TripError::NotPassenger)` - 403
    /// - `Err(TripError::NotFound)` - 404
    /// - `Err(TripError::AlreadyBooked)` - 409
    /// - `Err(TripError::NoSeatsLeft)` / `Err(TripError::NotBookable)` - 400
    /// - `Err(TripError::InsufficientCredits)` - 402
    pub async fn participate(
        &self,
        rider: &User,
        trip_id: i32,
        confirm: bool,
    ) -> Result<BookingOutcome, AppError> {
        if !rider.is_passenger {
            return Err(TripError::NotPassenger(rider.id).into());
        }

        let Some(trip) = TripRepository::new(self.db).find_by_id(trip_id).await? else {
            return Err(TripError::NotFound(trip_id).into());
        };

        if ParticipationRepository::new(self.db)
            .exists(rider.id, trip.id)
            .await?
        {
            return Err(already_booked(rider.id, trip.id));
        }

        if trip.seats <= 0 {
            return Err(TripError::NoSeatsLeft(trip.id).into());
        }
        if !trip.status.is_bookable() {
            return Err(TripError::NotBookable {
                trip_id: trip.id,
                status: trip.status,
            }
            .into());
        }

        let credits = UserRepository::new(self.db)
            .credits(rider.id)
            .await?
            .unwrap_or(0);
        if credits < PLATFORM_FEE {
            return Err(TripError::InsufficientCredits {
                required: PLATFORM_FEE,
                available: credits,
            }
            .into());
        }

        if !confirm {
            return Ok(BookingOutcome::ConfirmationRequired { credits });
        }

        let txn = self.db.begin().await?;

        let trips = TripRepository::new(&txn);
        if !trips.take_seat(trip.id).await? {
            return Err(TripError::NoSeatsLeft(trip.id).into());
        }

        let users = UserRepository::new(&txn);
        if !users.debit_credits(rider.id, PLATFORM_FEE).await? {
            let available = users.credits(rider.id).await?.unwrap_or(0);
            return Err(TripError::InsufficientCredits {
                required: PLATFORM_FEE,
                available,
            }
            .into());
        }

        if let Err(err) = ParticipationRepository::new(&txn)
            .create(rider.id, trip.id, ParticipationRole::Passenger)
            .await
        {
            if is_unique_violation(&err) {
                return Err(already_booked(rider.id, trip.id));
            }
            return Err(err.into());
        }

        trips.mark_full_if_no_seats(trip.id).await?;

        let remaining = users.credits(rider.id).await?.unwrap_or(0);

        txn.commit().await?;

        tracing::info!(
            "User {} booked a seat on trip {} ({} credits left)",
            rider.id,
            trip.id,
            remaining
        );

        if let Err(err) = self
            .documents
            .insert_booking(booking_record(rider, &trip))
            .await
        {
            tracing::error!(
                "Failed to mirror booking of user {} on trip {}: {}",
                rider.id,
                trip.id,
                err
            );
        }

        Ok(BookingOutcome::Booked {
            remaining_credits: remaining,
        })
    }
}

fn already_booked(user_id: i32, trip_id: i32) -> AppError {
    TripError::AlreadyBooked { user_id, trip_id }.into()
}

/// Denormalized snapshot of a booking for the document store.
pub(crate) fn booking_record(rider: &User, trip: &Trip) -> BookingRecord {
    BookingRecord {
        utilisateur: BookingUserSnapshot {
            id: rider.id,
            nom: rider.last_name.clone(),
            prenom: rider.first_name.clone(),
            email: rider.email.clone(),
        },
        covoiturage: BookingTripSnapshot {
            id: trip.id,
            lieu_depart: trip.departure_place.clone(),
            lieu_arrivee: trip.arrival_place.clone(),
            date_depart: trip.departure_date.to_string(),
            heure_depart: format_time(trip.departure_time),
            date_arrivee: trip.arrival_date.to_string(),
            prix_personne: trip.price,
        },
        credits_utilises: PLATFORM_FEE,
        date_participation: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}
