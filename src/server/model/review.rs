use chrono::{DateTime, Utc};
use entity::review::ReviewStatus;

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{error::AppError, util::parse::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub trip_id: i32,
    pub author_id: i32,
    pub driver_id: i32,
    pub rating: i32,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            author_id: entity.author_id,
            driver_id: entity.driver_id,
            rating: entity.rating,
            comment: entity.comment,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            note: self.rating,
            commentaire: self.comment,
            statut: self.status.label().to_string(),
            covoiturage_id: self.trip_id,
            auteur_id: self.author_id,
            chauffeur_id: self.driver_id,
            date_creation: self.created_at.to_rfc3339(),
        }
    }
}

/// Validated review submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReviewParams {
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Missing fields or rating outside 1..=5
    pub fn from_dto(dto: CreateReviewDto) -> Result<Self, AppError> {
        let (Some(rating), Some(comment)) = (dto.note, required(dto.commentaire)) else {
            return Err(AppError::BadRequest(
                "Note et commentaire obligatoires".to_string(),
            ));
        };

        if !(1..=5).contains(&rating) {
            return Err(AppError::BadRequest(
                "La note doit être comprise entre 1 et 5".to_string(),
            ));
        }

        Ok(Self { rating, comment })
    }
}
