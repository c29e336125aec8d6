use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::trip::TripListItemDto;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    /// Rating from 1 to 5
    pub note: Option<i32>,
    pub commentaire: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub note: i32,
    pub commentaire: String,
    /// `en_attente`, `approuve` or `rejete`
    pub statut: String,
    pub covoiturage_id: i32,
    pub auteur_id: i32,
    pub chauffeur_id: i32,
    pub date_creation: String,
}

/// Pending review shown on the employee dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PendingReviewDto {
    pub avis: ReviewDto,
    pub covoiturage: TripListItemDto,
}
