//! Review factory for creating reviews on a trip.

use chrono::Utc;
use entity::review::ReviewStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews.
///
/// Defaults to a pending 5-star review.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    author_id: i32,
    driver_id: i32,
    rating: i32,
    comment: String,
    status: ReviewStatus,
}

impl<'a> ReviewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, trip_id: i32, author_id: i32, driver_id: i32) -> Self {
        Self {
            db,
            trip_id,
            author_id,
            driver_id,
            rating: 5,
            comment: "Très bon trajet".to_string(),
            status: ReviewStatus::Pending,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            author_id: ActiveValue::Set(self.author_id),
            driver_id: ActiveValue::Set(self.driver_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
