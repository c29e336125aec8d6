//! Reviews left by riders and their moderation by employees.

use entity::{participation::ParticipationRole, review::ReviewStatus, trip::TripStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::review::CreateReviewDto,
    server::{
        data::{
            participation::ParticipationRepository, review::ReviewRepository,
            trip::TripRepository,
        },
        error::{internal::InternalError, is_unique_violation, trip::TripError, AppError},
        model::{
            review::{CreateReviewParams, Review},
            trip::Trip,
        },
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Leaves a review on a completed trip for its driver.
    ///
    /// The review waits for moderation before it is shown.
    ///
    /// # Arguments
    /// - `author_id` - Authenticated caller, who must be a passenger of the trip
    /// - `trip_id` - Reviewed trip
    /// - `dto` - Rating (1 to 5) and comment
    ///
    /// # Returns
    /// - `Ok(Review)` - Pending review
    /// - `Err(AppError::BadRequest)` - Invalid rating or comment, or trip not completed
    /// - `Err(TripError::NotFound)` - No trip with that ID
    /// - `Err(TripError::NotTripPassenger)` - Caller was not a passenger of the trip
    /// - `Err(AppError::Conflict)` - Caller already reviewed this trip
    pub async fn create(
        &self,
        author_id: i32,
        trip_id: i32,
        dto: CreateReviewDto,
    ) -> Result<Review, AppError> {
        let params = CreateReviewParams::from_dto(dto)?;

        let Some(trip) = TripRepository::new(self.db).find_by_id(trip_id).await? else {
            return Err(TripError::NotFound(trip_id).into());
        };

        let participations = ParticipationRepository::new(self.db);
        if participations.role_of(author_id, trip.id).await? != Some(ParticipationRole::Passenger)
        {
            return Err(TripError::NotTripPassenger {
                user_id: author_id,
                trip_id: trip.id,
            }
            .into());
        }

        if trip.status != TripStatus::Completed {
            return Err(AppError::BadRequest(
                "Seul un covoiturage terminé peut être évalué".to_string(),
            ));
        }

        let reviews = ReviewRepository::new(self.db);
        if reviews.exists_for(author_id, trip.id).await? {
            return Err(already_reviewed());
        }

        let Some(driver_id) = participations.driver_of(trip.id).await? else {
            return Err(InternalError::TripWithoutDriver { trip_id: trip.id }.into());
        };

        reviews
            .create(trip.id, author_id, driver_id, params.rating, params.comment)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    already_reviewed()
                } else {
                    err.into()
                }
            })
    }

    /// Approved reviews of a driver, newest first.
    pub async fn approved_for_driver(&self, driver_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .approved_for_driver(driver_id)
            .await?)
    }

    /// Reviews awaiting moderation with the trip they concern.
    pub async fn pending(&self) -> Result<Vec<(Review, Trip)>, AppError> {
        Ok(ReviewRepository::new(self.db).pending_with_trip().await?)
    }

    /// Approves or rejects a review.
    ///
    /// # Returns
    /// - `Ok(Review)` - Review with its new status
    /// - `Err(AppError::NotFound)` - No review with that ID
    pub async fn moderate(&self, id: i32, status: ReviewStatus) -> Result<Review, AppError> {
        let review = ReviewRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Avis introuvable".to_string()))?;

        tracing::info!("Review {} set to {}", review.id, status.label());

        Ok(review)
    }
}

fn already_reviewed() -> AppError {
    AppError::Conflict("Vous avez déjà évalué ce covoiturage".to_string())
}
