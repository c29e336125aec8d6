use chrono::Utc;
use entity::review::ReviewStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{review::Review, trip::Trip};

/// Repository for reviews left by passengers on their drivers.
pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a new pending review.
    pub async fn create(
        &self,
        trip_id: i32,
        author_id: i32,
        driver_id: i32,
        rating: i32,
        comment: String,
    ) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            trip_id: ActiveValue::Set(trip_id),
            author_id: ActiveValue::Set(author_id),
            driver_id: ActiveValue::Set(driver_id),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment),
            status: ActiveValue::Set(ReviewStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    pub async fn exists_for(&self, author_id: i32, trip_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::AuthorId.eq(author_id))
            .filter(entity::review::Column::TripId.eq(trip_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Approved reviews of a driver, newest first.
    pub async fn approved_for_driver(&self, driver_id: i32) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::DriverId.eq(driver_id))
            .filter(entity::review::Column::Status.eq(ReviewStatus::Approved))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Approved reviews left on a trip.
    pub async fn approved_for_trip(&self, trip_id: i32) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find()
            .filter(entity::review::Column::TripId.eq(trip_id))
            .filter(entity::review::Column::Status.eq(ReviewStatus::Approved))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Mean rating of a driver's approved reviews, `None` without any.
    pub async fn average_for_driver(&self, driver_id: i32) -> Result<Option<f64>, DbErr> {
        let ratings: Vec<i32> = self
            .approved_for_driver(driver_id)
            .await?
            .into_iter()
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: i32 = ratings.iter().sum();
        Ok(Some(f64::from(sum) / ratings.len() as f64))
    }

    /// Pending reviews with their trip, oldest first.
    pub async fn pending_with_trip(&self) -> Result<Vec<(Review, Trip)>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::Status.eq(ReviewStatus::Pending))
            .find_also_related(entity::prelude::Trip)
            .order_by_asc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(review, trip)| {
                trip.map(|t| (Review::from_entity(review), Trip::from_entity(t)))
            })
            .collect())
    }

    /// Sets the moderation status.
    ///
    /// # Returns
    /// - `Ok(None)` - No review with that ID
    pub async fn set_status(
        &self,
        id: i32,
        status: ReviewStatus,
    ) -> Result<Option<Review>, DbErr> {
        if entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let entity = entity::review::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Some(Review::from_entity(entity)))
    }
}
