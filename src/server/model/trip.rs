//! Trip domain models and parameters.
//!
//! Covers the trip itself, the search criteria and results, the details view and
//! the validated parameters of trip creation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use entity::{participation::ParticipationRole, trip::TripStatus};

use crate::{
    model::trip::{
        CreateTripDto, DriverDto, MyTripDto, SearchTripsQueryDto, TripDetailsDto,
        TripListItemDto, TripReviewDto, TripSearchResultDto, TripVehicleDto,
    },
    model::configuration::ParameterInputDto,
    server::{
        error::AppError,
        model::{configuration::ParameterInput, vehicle::Vehicle},
        util::parse::{encode_photo, format_time, parse_date, parse_time, required},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub departure_place: String,
    pub arrival_place: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    /// Seats still free.
    pub seats: i32,
    /// Price of one seat, in credits.
    pub price: i32,
    pub status: TripStatus,
}

impl Trip {
    pub fn from_entity(entity: entity::trip::Model) -> Self {
        Self {
            id: entity.id,
            departure_place: entity.departure_place,
            arrival_place: entity.arrival_place,
            departure_date: entity.departure_date,
            departure_time: entity.departure_time,
            arrival_date: entity.arrival_date,
            arrival_time: entity.arrival_time,
            seats: entity.seats,
            price: entity.price,
            status: entity.status,
        }
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.arrival() - self.departure()).num_minutes()
    }

    pub fn into_list_item_dto(self) -> TripListItemDto {
        TripListItemDto {
            id: self.id,
            lieu_depart: self.departure_place,
            lieu_arrivee: self.arrival_place,
            date_depart: self.departure_date.to_string(),
            heure_depart: format_time(self.departure_time),
            date_arrivee: self.arrival_date.to_string(),
            heure_arrivee: format_time(self.arrival_time),
            prix: self.price,
            places_restantes: self.seats,
            statut: self.status.label().to_string(),
        }
    }

    pub fn into_my_trip_dto(self, role: ParticipationRole) -> MyTripDto {
        MyTripDto {
            covoiturage: self.into_list_item_dto(),
            role: role.label().to_string(),
        }
    }
}

/// Public view of a trip's driver.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSummary {
    pub id: i32,
    pub pseudo: Option<String>,
    pub photo: Option<Vec<u8>>,
    /// Average of approved reviews, one decimal.
    pub note: Option<f64>,
}

impl DriverSummary {
    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            pseudo: self.pseudo,
            photo: self.photo.as_deref().map(encode_photo),
            note: self.note,
        }
    }
}

/// Rounds an average to one decimal.
pub fn round_note(average: f64) -> f64 {
    (average * 10.0).round() / 10.0
}

/// Validated search criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSearchParams {
    pub departure_place: String,
    pub arrival_place: String,
    pub date: NaiveDate,
    pub ecological_only: bool,
    pub max_price: Option<i32>,
    pub max_duration_minutes: Option<i64>,
    pub min_note: Option<f64>,
}

impl TripSearchParams {
    /// # Returns
    /// - `Ok(TripSearchParams)` - Criteria ready for the search
    /// - `Err(AppError::BadRequest)` - Missing place or date, or malformed date
    pub fn from_dto(dto: SearchTripsQueryDto) -> Result<Self, AppError> {
        let (Some(departure_place), Some(arrival_place), Some(date)) = (
            required(dto.depart),
            required(dto.arrivee),
            required(dto.date),
        ) else {
            return Err(AppError::BadRequest(
                "Paramètres requis : depart, arrivee, date".to_string(),
            ));
        };

        Ok(Self {
            departure_place,
            arrival_place,
            date: parse_date(&date, "date")?,
            ecological_only: dto
                .ecologique
                .as_deref()
                .is_some_and(|v| matches!(v.trim(), "1" | "true")),
            max_price: dto.prix_max,
            max_duration_minutes: dto.duree_max,
            min_note: dto.note_min,
        })
    }
}

/// One search hit with its driver and ecological flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSearchResult {
    pub trip: Trip,
    pub driver: DriverSummary,
    pub ecological: bool,
}

impl TripSearchResult {
    /// Applies the optional filters of the search.
    pub fn matches(&self, params: &TripSearchParams) -> bool {
        if params.ecological_only && !self.ecological {
            return false;
        }
        if params.max_price.is_some_and(|max| self.trip.price > max) {
            return false;
        }
        if params
            .max_duration_minutes
            .is_some_and(|max| self.trip.duration_minutes() > max)
        {
            return false;
        }
        if let Some(min) = params.min_note {
            return self.driver.note.is_some_and(|note| note >= min);
        }
        true
    }

    pub fn into_dto(self) -> TripSearchResultDto {
        TripSearchResultDto {
            id: self.trip.id,
            chauffeur: self.driver.into_dto(),
            lieu_depart: self.trip.departure_place,
            lieu_arrivee: self.trip.arrival_place,
            places_restantes: self.trip.seats,
            prix: self.trip.price,
            date_depart: self.trip.departure_date.to_string(),
            heure_depart: format_time(self.trip.departure_time),
            date_arrivee: self.trip.arrival_date.to_string(),
            heure_arrivee: format_time(self.trip.arrival_time),
            ecologique: self.ecological,
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum TripSearchOutcome {
    Found(Vec<TripSearchResult>),
    /// Nothing matched; carries the next later departure date with seats, if any.
    Empty { next_date: Option<NaiveDate> },
}

/// Everything shown on a trip's detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub trip: Trip,
    pub driver: Option<DriverSummary>,
    pub vehicle: Option<Vehicle>,
    pub preferences: Vec<ParameterInput>,
    /// (rating, comment) of approved reviews
    pub reviews: Vec<(i32, String)>,
}

impl TripDetails {
    pub fn into_dto(self) -> TripDetailsDto {
        let ecological = self
            .vehicle
            .as_ref()
            .is_some_and(|v| super::vehicle::is_ecological(&v.energy));

        TripDetailsDto {
            id: self.trip.id,
            lieu_depart: self.trip.departure_place,
            lieu_arrivee: self.trip.arrival_place,
            date_depart: self.trip.departure_date.to_string(),
            heure_depart: format_time(self.trip.departure_time),
            date_arrivee: self.trip.arrival_date.to_string(),
            heure_arrivee: format_time(self.trip.arrival_time),
            prix: self.trip.price,
            places_restantes: self.trip.seats,
            statut: self.trip.status.label().to_string(),
            ecologique: ecological,
            chauffeur: self.driver.map(DriverSummary::into_dto),
            vehicule: self.vehicle.map(|v| TripVehicleDto {
                marque: v.brand_label(),
                modele: v.model,
                energie: v.energy,
            }),
            preferences: self
                .preferences
                .into_iter()
                .map(|p| ParameterInputDto {
                    propriete: p.property,
                    valeur: p.value,
                })
                .collect(),
            avis: self
                .reviews
                .into_iter()
                .map(|(note, commentaire)| TripReviewDto { note, commentaire })
                .collect(),
        }
    }
}

/// Validated trip creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTripParams {
    pub departure_place: String,
    pub arrival_place: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub seats: i32,
    pub price: i32,
    pub vehicle_id: i32,
    pub status: TripStatus,
}

impl CreateTripParams {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateTripParams)` - Every field present and consistent
    /// - `Err(AppError::BadRequest)` - Missing field, seats < 1, negative price,
    ///   unparseable date or time, arrival not after departure, or an initial status
    ///   other than `disponible`/`confirmé`
    pub fn from_dto(dto: CreateTripDto) -> Result<Self, AppError> {
        let (
            Some(departure_place),
            Some(arrival_place),
            Some(price),
            Some(vehicle_id),
            Some(departure_date),
            Some(departure_time),
            Some(arrival_date),
            Some(arrival_time),
            Some(seats),
        ) = (
            required(dto.lieu_depart),
            required(dto.lieu_arrivee),
            dto.prix_personne,
            dto.voiture_id,
            required(dto.date_depart),
            required(dto.heure_depart),
            required(dto.date_arrivee),
            required(dto.heure_arrivee),
            dto.nb_place,
        )
        else {
            return Err(AppError::BadRequest(
                "Tous les champs du covoiturage sont obligatoires".to_string(),
            ));
        };

        if seats < 1 {
            return Err(AppError::BadRequest(
                "Le nombre de places doit être au moins 1".to_string(),
            ));
        }
        if price < 0 {
            return Err(AppError::BadRequest(
                "Le prix ne peut pas être négatif".to_string(),
            ));
        }

        let status = match required(dto.statut) {
            None => TripStatus::Available,
            Some(label) => match TripStatus::from_label(&label) {
                Some(status @ (TripStatus::Available | TripStatus::Confirmed)) => status,
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Statut initial invalide : {}",
                        label
                    )))
                }
            },
        };

        let params = Self {
            departure_place,
            arrival_place,
            departure_date: parse_date(&departure_date, "dateDepart")?,
            departure_time: parse_time(&departure_time, "heureDepart")?,
            arrival_date: parse_date(&arrival_date, "dateArrivee")?,
            arrival_time: parse_time(&arrival_time, "heureArrivee")?,
            seats,
            price,
            vehicle_id,
            status,
        };

        if params.arrival_date.and_time(params.arrival_time)
            <= params.departure_date.and_time(params.departure_time)
        {
            return Err(AppError::BadRequest(
                "L'arrivée doit être postérieure au départ".to_string(),
            ));
        }

        Ok(params)
    }
}
