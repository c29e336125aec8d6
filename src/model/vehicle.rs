use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vehicle as listed to its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    /// Brand label, or `Marque inconnue` when the vehicle has no brand.
    pub marque: String,
    pub modele: String,
    pub immatriculation: String,
    pub energie: String,
    pub couleur: String,
}
