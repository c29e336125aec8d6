use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::configuration::ParameterInputDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub pseudo: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    /// `YYYY-MM-DD`
    pub date_naissance: Option<String>,
    /// Base64 encoded image
    pub photo: Option<String>,
    pub credits: i32,
    pub is_chauffeur: bool,
    pub is_passager: bool,
    pub roles: Vec<String>,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub pseudo: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub date_naissance: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    pub email: Option<String>,
    pub is_chauffeur: Option<bool>,
    pub is_passager: Option<bool>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverVehicleDto {
    pub immatriculation: Option<String>,
    pub modele: Option<String>,
    pub couleur: Option<String>,
    pub energie: Option<String>,
    pub date_premiere_immatriculation: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterDriverDto {
    pub voiture: Option<DriverVehicleDto>,
    pub marque: Option<String>,
    #[serde(default)]
    pub preferences: Vec<ParameterInputDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDriverResponseDto {
    pub message: String,
    pub voiture_id: i32,
}
