//! Reporting views over the document store: booking confirmations, bookings grouped
//! per trip, and the archive of completed trips.

use std::collections::{BTreeMap, HashSet};

use entity::trip::TripStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::document::{BookingRecord, ParticipantDto, ReservationRecord, TripParticipantsDto},
    server::{
        data::{participation::ParticipationRepository, trip::TripRepository},
        error::AppError,
        store::DocumentStore,
        util::parse::format_time,
    },
};

/// Largest page accepted by the confirmations listing.
pub const MAX_PAGE_SIZE: u64 = 200;

/// Role reported for every rider found in booking records.
const RIDER_ROLE: &str = "passager";

pub struct HistoryService<'a> {
    db: &'a DatabaseConnection,
    documents: &'a dyn DocumentStore,
}

impl<'a> HistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, documents: &'a dyn DocumentStore) -> Self {
        Self { db, documents }
    }

    /// Names of the non-empty collections.
    pub async fn collections(&self) -> Result<Vec<String>, AppError> {
        Ok(self.documents.collection_names().await?)
    }

    /// One page of booking records, newest first.
    ///
    /// # Arguments
    /// - `page` - 1-based page number
    /// - `limit` - Page size, 1 to 200
    ///
    /// # Returns
    /// - `Ok(Vec<BookingRecord>)` - Records of the page, possibly empty
    /// - `Err(AppError::BadRequest)` - Page or limit out of range, or an offset past `i64::MAX`
    pub async fn confirmations(&self, page: i64, limit: i64) -> Result<Vec<BookingRecord>, AppError> {
        if page < 1 || limit < 1 {
            return Err(AppError::BadRequest(
                "page et limit doivent être supérieurs à 0".to_string(),
            ));
        }
        if limit.unsigned_abs() > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "limit ne peut pas dépasser {}",
                MAX_PAGE_SIZE
            )));
        }
        let Some(skip) = (page - 1).checked_mul(limit) else {
            return Err(AppError::BadRequest("page hors limites".to_string()));
        };

        Ok(self
            .documents
            .bookings_page(skip.unsigned_abs(), limit.unsigned_abs())
            .await?)
    }

    /// Booking records grouped per trip, ordered by trip ID.
    pub async fn participations_by_trip(&self) -> Result<Vec<TripParticipantsDto>, AppError> {
        let records = self.documents.all_bookings().await?;

        let mut grouped: BTreeMap<i32, TripParticipantsDto> = BTreeMap::new();
        for record in records {
            let trip = record.covoiturage;
            let participant = ParticipantDto {
                name: format!("{} {}", record.utilisateur.prenom, record.utilisateur.nom),
                role: RIDER_ROLE.to_string(),
            };

            grouped
                .entry(trip.id)
                .or_insert_with(|| TripParticipantsDto {
                    covoiturage_id: trip.id,
                    departure: trip.lieu_depart,
                    destination: trip.lieu_arrivee,
                    date_depart: trip.date_depart,
                    price: trip.prix_personne,
                    participants: Vec::new(),
                })
                .participants
                .push(participant);
        }

        Ok(grouped.into_values().collect())
    }

    /// Copies every completed trip not yet archived into the `reservations` collection.
    ///
    /// Writes are keyed by trip, so overlapping runs (cron tick and history endpoint)
    /// leave one document per trip.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of trips archived by this call
    pub async fn archive_completed(&self) -> Result<usize, AppError> {
        let archived: HashSet<i32> = self
            .documents
            .reservations()
            .await?
            .into_iter()
            .map(|r| r.covoiturage_id)
            .collect();

        let completed = TripRepository::new(self.db)
            .get_by_status(TripStatus::Completed)
            .await?;

        let participations = ParticipationRepository::new(self.db);
        let mut records = Vec::new();
        for trip in completed.into_iter().filter(|t| !archived.contains(&t.id)) {
            let participants = participations
                .participants_of(trip.id)
                .await?
                .into_iter()
                .map(|(user, role)| ParticipantDto {
                    name: format!("{} {}", user.first_name, user.last_name),
                    role: role.label().to_string(),
                })
                .collect();

            records.push(ReservationRecord {
                covoiturage_id: trip.id,
                departure: trip.departure_place,
                destination: trip.arrival_place,
                date_depart: format!(
                    "{} {}",
                    trip.departure_date,
                    format_time(trip.departure_time)
                ),
                date_arrivee: format!("{} {}", trip.arrival_date, format_time(trip.arrival_time)),
                price: trip.price,
                statut: trip.status.label().to_string(),
                participants,
            });
        }

        let count = records.len();
        self.documents.upsert_reservations(records).await?;

        if count > 0 {
            tracing::info!("Archived {} completed trip(s)", count);
        }

        Ok(count)
    }

    /// Archives pending completed trips, then returns the whole archive.
    pub async fn history(&self) -> Result<Vec<ReservationRecord>, AppError> {
        self.archive_completed().await?;

        Ok(self.documents.reservations().await?)
    }
}
