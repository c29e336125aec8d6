//! Trip and seat cancellation.

use entity::{participation::ParticipationRole, trip::TripStatus};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        participation::ParticipationRepository, trip::TripRepository, user::UserRepository,
    },
    error::{trip::TripError, AppError},
    model::{
        booking::{CancelOutcome, RefundedRider, PLATFORM_FEE},
        trip::Trip,
        user::User,
    },
    service::mail::MailService,
};

pub struct CancellationService<'a> {
    db: &'a DatabaseConnection,
    mail: &'a MailService,
}

impl<'a> CancellationService<'a> {
    pub fn new(db: &'a DatabaseConnection, mail: &'a MailService) -> Self {
        Self { db, mail }
    }

    /// Cancels a trip (driver) or a seat (rider).
    ///
    /// The driver path refunds every rider the seat price, removes all participations,
    /// marks the trip `annulé`, refunds the driver's 2-credit fee and then mails each
    /// refunded rider. The rider path refunds the seat price, gives the seat back and
    /// reopens a full trip. Both paths run in one transaction.
    ///
    /// # Arguments
    /// - `user` - Authenticated caller
    /// - `trip_id` - Trip to cancel
    ///
    /// # Returns
    /// - `Ok(CancelOutcome)` - What was cancelled and the caller's remaining credits
    /// - `Err(TripError::NotFound)` - No trip with that ID (404)
    /// - `Err(TripError::CancelNotAllowed)` - Caller does not participate (403)
    /// - `Err(TripError::NotCancellable)` - Trip already cancelled or completed (400)
    pub async fn cancel(&self, user: &User, trip_id: i32) -> Result<CancelOutcome, AppError> {
        let Some(trip) = TripRepository::new(self.db).find_by_id(trip_id).await? else {
            return Err(TripError::NotFound(trip_id).into());
        };

        let Some(role) = ParticipationRepository::new(self.db)
            .role_of(user.id, trip.id)
            .await?
        else {
            return Err(TripError::CancelNotAllowed {
                user_id: user.id,
                trip_id: trip.id,
            }
            .into());
        };

        if !trip.status.is_cancellable() {
            return Err(not_cancellable(&trip));
        }

        let txn = self.db.begin().await?;

        let outcome = match role {
            ParticipationRole::Driver => self.cancel_trip(&txn, user, &trip).await?,
            ParticipationRole::Passenger => self.release_seat(&txn, user, &trip).await?,
        };

        txn.commit().await?;

        if let CancelOutcome::TripCancelled { refunded, .. } = &outcome {
            tracing::info!(
                "Driver {} cancelled trip {}, {} rider(s) refunded",
                user.id,
                trip.id,
                refunded.len()
            );
            for rider in refunded {
                self.mail
                    .send_trip_cancelled(&rider.email, &rider.name, &trip, rider.amount)
                    .await;
            }
        } else {
            tracing::info!("User {} cancelled their seat on trip {}", user.id, trip.id);
        }

        Ok(outcome)
    }

    async fn cancel_trip(
        &self,
        txn: &DatabaseTransaction,
        driver: &User,
        trip: &Trip,
    ) -> Result<CancelOutcome, AppError> {
        let trips = TripRepository::new(txn);
        if !trips
            .transition(trip.id, &TripStatus::CANCELLABLE, TripStatus::Cancelled)
            .await?
        {
            return Err(not_cancellable(trip));
        }

        let participations = ParticipationRepository::new(txn);
        let users = UserRepository::new(txn);

        let mut refunded = Vec::new();
        for (rider, role) in participations.participants_of(trip.id).await? {
            if role != ParticipationRole::Passenger {
                continue;
            }

            users.credit_credits(rider.id, trip.price).await?;
            participations.delete(rider.id, trip.id).await?;

            refunded.push(RefundedRider {
                user_id: rider.id,
                name: rider.pseudo.unwrap_or(rider.first_name),
                email: rider.email,
                amount: trip.price,
            });
        }

        participations.delete(driver.id, trip.id).await?;
        users.credit_credits(driver.id, PLATFORM_FEE).await?;

        let remaining_credits = users.credits(driver.id).await?.unwrap_or(0);

        Ok(CancelOutcome::TripCancelled {
            refunded,
            remaining_credits,
        })
    }

    async fn release_seat(
        &self,
        txn: &DatabaseTransaction,
        rider: &User,
        trip: &Trip,
    ) -> Result<CancelOutcome, AppError> {
        let participations = ParticipationRepository::new(txn);
        if !participations.delete(rider.id, trip.id).await? {
            return Err(TripError::CancelNotAllowed {
                user_id: rider.id,
                trip_id: trip.id,
            }
            .into());
        }

        let trips = TripRepository::new(txn);
        if !trips.release_seat(trip.id).await? {
            return Err(not_cancellable(trip));
        }
        trips
            .transition(trip.id, &[TripStatus::Full], TripStatus::Available)
            .await?;

        let users = UserRepository::new(txn);
        users.credit_credits(rider.id, trip.price).await?;
        let remaining_credits = users.credits(rider.id).await?.unwrap_or(0);

        Ok(CancelOutcome::SeatReleased { remaining_credits })
    }
}

fn not_cancellable(trip: &Trip) -> AppError {
    TripError::NotCancellable {
        trip_id: trip.id,
        status: trip.status,
    }
    .into()
}
