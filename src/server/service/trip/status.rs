use entity::trip::TripStatus;

use crate::{
    model::trip::UpdateTripStatusDto,
    server::{
        data::{participation::ParticipationRepository, trip::TripRepository},
        error::{trip::TripError, AppError},
        model::trip::Trip,
        service::trip::TripService,
        util::parse::required,
    },
};

impl<'a> TripService<'a> {
    /// Moves a trip to a new status following the transition table.
    ///
    /// Cancellation is refused here because it must refund riders; it goes through
    /// the cancellation flow instead.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated caller, who must be the trip's driver
    /// - `trip_id` - Trip to update
    /// - `dto` - New status label
    ///
    /// # Returns
    /// - `Ok(Trip)` - Trip with its new status
    /// - `Err(AppError::BadRequest)` - Missing or unknown label, or `annulé`
    /// - `Err(TripError::NotFound)` - No trip with that ID
    /// - `Err(TripError::NotTripDriver)` - Caller is not the driver
    /// - `Err(TripError::InvalidTransition)` - Transition not allowed from the current status
    pub async fn update_status(
        &self,
        user_id: i32,
        trip_id: i32,
        dto: UpdateTripStatusDto,
    ) -> Result<Trip, AppError> {
        let Some(label) = required(dto.statut) else {
            return Err(AppError::BadRequest("Statut obligatoire".to_string()));
        };
        let Some(next) = TripStatus::from_label(&label) else {
            return Err(AppError::BadRequest(format!("Statut inconnu : {}", label)));
        };

        let trips = TripRepository::new(self.db);
        let Some(trip) = trips.find_by_id(trip_id).await? else {
            return Err(TripError::NotFound(trip_id).into());
        };

        let driver_id = ParticipationRepository::new(self.db)
            .driver_of(trip.id)
            .await?;
        if driver_id != Some(user_id) {
            return Err(TripError::NotTripDriver { user_id, trip_id }.into());
        }

        if next == TripStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Utilisez l'annulation pour annuler un covoiturage".to_string(),
            ));
        }

        if !trip.status.can_transition_to(next)
            || !trips.transition(trip.id, &[trip.status], next).await?
        {
            return Err(TripError::InvalidTransition {
                from: trip.status,
                to: next,
            }
            .into());
        }

        tracing::info!(
            "Trip {} moved from {} to {}",
            trip.id,
            trip.status.label(),
            next.label()
        );

        Ok(Trip {
            status: next,
            ..trip
        })
    }
}
