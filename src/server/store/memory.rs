use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    model::document::{BookingRecord, ReservationRecord},
    server::store::{
        DocumentStore, StoreError, PARTICIPATIONS_COLLECTION, RESERVATIONS_COLLECTION,
    },
};

/// Process-local document store.
///
/// Used when no MongoDB URL is configured and in tests. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryDocumentStore {
    bookings: RwLock<Vec<BookingRecord>>,
    reservations: RwLock<Vec<ReservationRecord>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        if !self.bookings.read().await.is_empty() {
            names.push(PARTICIPATIONS_COLLECTION.to_string());
        }
        if !self.reservations.read().await.is_empty() {
            names.push(RESERVATIONS_COLLECTION.to_string());
        }
        Ok(names)
    }

    async fn insert_booking(&self, record: BookingRecord) -> Result<(), StoreError> {
        self.bookings.write().await.push(record);
        Ok(())
    }

    async fn bookings_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<BookingRecord>, StoreError> {
        let mut bookings = self.bookings.read().await.clone();
        bookings.sort_by(|a, b| b.date_participation.cmp(&a.date_participation));

        Ok(bookings
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }

    async fn all_bookings(&self) -> Result<Vec<BookingRecord>, StoreError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn upsert_reservations(
        &self,
        records: Vec<ReservationRecord>,
    ) -> Result<(), StoreError> {
        let mut reservations = self.reservations.write().await;
        for record in records {
            match reservations
                .iter_mut()
                .find(|r| r.covoiturage_id == record.covoiturage_id)
            {
                Some(existing) => *existing = record,
                None => reservations.push(record),
            }
        }
        Ok(())
    }

    async fn reservations(&self) -> Result<Vec<ReservationRecord>, StoreError> {
        let mut reservations = self.reservations.read().await.clone();
        reservations.sort_by_key(|r| r.covoiturage_id);
        Ok(reservations)
    }
}
