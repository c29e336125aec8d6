//! Vehicle domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::{profile::DriverVehicleDto, vehicle::VehicleDto},
    server::{
        error::AppError,
        util::parse::{parse_date, required},
    },
};

/// Label shown for vehicles without a brand.
pub const UNKNOWN_BRAND: &str = "Marque inconnue";

/// Energies counted as ecological, compared lowercased.
const ECOLOGICAL_ENERGIES: [&str; 5] = [
    "électrique",
    "electrique",
    "hybride",
    "hydrogène",
    "hydrogene",
];

/// Returns true when a trip driven with this energy counts as ecological.
pub fn is_ecological(energy: &str) -> bool {
    let energy = energy.trim().to_lowercase();
    ECOLOGICAL_ENERGIES.contains(&energy.as_str())
}

/// Vehicle with its brand label resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub owner_id: i32,
    pub brand: Option<String>,
    pub model: String,
    pub plate: String,
    pub energy: String,
    pub color: String,
}

impl Vehicle {
    pub fn from_entity(
        entity: entity::vehicle::Model,
        brand: Option<entity::brand::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            brand: brand.map(|b| b.label),
            model: entity.model,
            plate: entity.plate,
            energy: entity.energy,
            color: entity.color,
        }
    }

    pub fn brand_label(&self) -> String {
        self.brand
            .clone()
            .unwrap_or_else(|| UNKNOWN_BRAND.to_string())
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            marque: self.brand_label(),
            modele: self.model,
            immatriculation: self.plate,
            energie: self.energy,
            couleur: self.color,
        }
    }
}

/// Parameters for registering a vehicle.
#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub owner_id: i32,
    pub brand_id: Option<i32>,
    pub model: String,
    pub plate: String,
    pub energy: String,
    pub color: String,
    pub first_registration: Option<NaiveDate>,
}

/// Validated vehicle fields of a driver registration.
#[derive(Debug, Clone)]
pub struct DriverVehicleInput {
    pub plate: String,
    pub model: String,
    pub color: String,
    pub energy: String,
    pub first_registration: NaiveDate,
}

impl DriverVehicleInput {
    pub fn from_dto(dto: DriverVehicleDto) -> Result<Self, AppError> {
        let (Some(plate), Some(model), Some(color), Some(energy), Some(first_registration)) = (
            required(dto.immatriculation),
            required(dto.modele),
            required(dto.couleur),
            required(dto.energie),
            required(dto.date_premiere_immatriculation),
        ) else {
            return Err(AppError::BadRequest(
                "Informations du véhicule incomplètes".to_string(),
            ));
        };

        Ok(Self {
            plate: plate.to_uppercase(),
            model,
            color,
            energy,
            first_registration: parse_date(&first_registration, "datePremiereImmatriculation")?,
        })
    }
}
