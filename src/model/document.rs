//! Documents kept in the document store and the responses built from them.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingUserSnapshot {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingTripSnapshot {
    pub id: i32,
    pub lieu_depart: String,
    pub lieu_arrivee: String,
    pub date_depart: String,
    pub heure_depart: String,
    pub date_arrivee: String,
    pub prix_personne: i32,
}

/// Denormalized copy of a booking, stored in the `participations` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub utilisateur: BookingUserSnapshot,
    pub covoiturage: BookingTripSnapshot,
    pub credits_utilises: i32,
    /// RFC 3339 UTC timestamp with fixed microsecond precision, so that string
    /// order is chronological order.
    pub date_participation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub name: String,
    pub role: String,
}

/// Completed trip archived in the `reservations` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub covoiturage_id: i32,
    pub departure: String,
    pub destination: String,
    pub date_depart: String,
    pub date_arrivee: String,
    pub price: i32,
    pub statut: String,
    pub participants: Vec<ParticipantDto>,
}

/// Booking records grouped per trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripParticipantsDto {
    pub covoiturage_id: i32,
    pub departure: String,
    pub destination: String,
    pub date_depart: String,
    pub price: i32,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingPageQueryDto {
    /// 1-based page number, default 1
    pub page: Option<i64>,
    /// Page size, default 50, at most 200
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingPageDto {
    pub page: u64,
    pub limit: u64,
    pub data: Vec<BookingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CollectionsDto {
    pub status: String,
    pub collections: Vec<String>,
}
