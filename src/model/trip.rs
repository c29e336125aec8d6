use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::configuration::ParameterInputDto;

/// Search criteria. `depart`, `arrivee` and `date` are required; the remaining
/// fields narrow the result.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchTripsQueryDto {
    pub depart: Option<String>,
    pub arrivee: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `1` or `true` keeps only ecological trips
    pub ecologique: Option<String>,
    pub prix_max: Option<i32>,
    /// Maximum duration in minutes
    pub duree_max: Option<i64>,
    pub note_min: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DriverDto {
    pub id: i32,
    pub pseudo: Option<String>,
    /// Base64 encoded image
    pub photo: Option<String>,
    /// Average of approved reviews, one decimal
    pub note: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripSearchResultDto {
    pub id: i32,
    pub chauffeur: DriverDto,
    pub lieu_depart: String,
    pub lieu_arrivee: String,
    pub places_restantes: i32,
    pub prix: i32,
    pub date_depart: String,
    pub heure_depart: String,
    pub date_arrivee: String,
    pub heure_arrivee: String,
    pub ecologique: bool,
}

/// 404 body of an empty search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoTripFoundDto {
    pub message: String,
    /// First later departure date with seats, if any
    pub prochain_covoiturage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripListItemDto {
    pub id: i32,
    pub lieu_depart: String,
    pub lieu_arrivee: String,
    pub date_depart: String,
    pub heure_depart: String,
    pub date_arrivee: String,
    pub heure_arrivee: String,
    pub prix: i32,
    pub places_restantes: i32,
    pub statut: String,
}

/// Trip the caller participates in, with the caller's role on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MyTripDto {
    #[serde(flatten)]
    pub covoiturage: TripListItemDto,
    /// `chauffeur` or `passager`
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripVehicleDto {
    pub marque: String,
    pub modele: String,
    pub energie: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripReviewDto {
    pub note: i32,
    pub commentaire: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDetailsDto {
    pub id: i32,
    pub lieu_depart: String,
    pub lieu_arrivee: String,
    pub date_depart: String,
    pub heure_depart: String,
    pub date_arrivee: String,
    pub heure_arrivee: String,
    pub prix: i32,
    pub places_restantes: i32,
    pub statut: String,
    pub ecologique: bool,
    /// Null once the driver has cancelled the trip
    pub chauffeur: Option<DriverDto>,
    pub vehicule: Option<TripVehicleDto>,
    pub preferences: Vec<ParameterInputDto>,
    pub avis: Vec<TripReviewDto>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripDto {
    pub lieu_depart: Option<String>,
    pub lieu_arrivee: Option<String>,
    pub prix_personne: Option<i32>,
    pub voiture_id: Option<i32>,
    pub date_depart: Option<String>,
    pub heure_depart: Option<String>,
    pub date_arrivee: Option<String>,
    pub heure_arrivee: Option<String>,
    pub nb_place: Option<i32>,
    /// `disponible` (default) or `confirmé`
    pub statut: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripResponseDto {
    pub message: String,
    pub covoiturage_id: i32,
    pub credits_restants: i32,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipateQueryDto {
    /// `1` or `true` confirms the booking
    pub confirm: Option<String>,
}

/// 202 body asking the rider to confirm the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmationDto {
    pub message: String,
    pub credits_requis: i32,
    pub credits_actuels: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResultDto {
    pub message: String,
    pub credits_restants: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelResultDto {
    pub message: String,
    pub credits_restants: i32,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTripStatusDto {
    pub statut: Option<String>,
}
