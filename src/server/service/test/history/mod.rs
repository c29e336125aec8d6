use entity::trip::TripStatus;

use crate::{
    model::document::{BookingRecord, BookingTripSnapshot, BookingUserSnapshot},
    server::{
        error::AppError,
        service::history::HistoryService,
        store::{memory::MemoryDocumentStore, DocumentStore},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod archive_completed;
mod participations_by_trip;

fn booking(user_id: i32, trip_id: i32, at: &str) -> BookingRecord {
    BookingRecord {
        utilisateur: BookingUserSnapshot {
            id: user_id,
            nom: format!("Nom{}", user_id),
            prenom: format!("Prenom{}", user_id),
            email: format!("user{}@ecoride.test", user_id),
        },
        covoiturage: BookingTripSnapshot {
            id: trip_id,
            lieu_depart: "Paris".to_string(),
            lieu_arrivee: "Lyon".to_string(),
            date_depart: "2030-01-15".to_string(),
            heure_depart: "09:00".to_string(),
            date_arrivee: "2030-01-15".to_string(),
            prix_personne: 10,
        },
        credits_utilises: 2,
        date_participation: at.to_string(),
    }
}
