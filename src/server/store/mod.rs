//! Document store holding denormalized booking records and the archive of
//! completed trips.
//!
//! Two collections are used:
//! - `participations` - one [`BookingRecord`] per confirmed booking
//! - `reservations` - one [`ReservationRecord`] per archived completed trip
//!
//! The store is written after the relational transaction commits. It is a reporting
//! copy: losing a write never affects bookings.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::document::{BookingRecord, ReservationRecord};

pub use memory::MemoryDocumentStore;
pub use mongo::MongoDocumentStore;

pub const PARTICIPATIONS_COLLECTION: &str = "participations";
pub const RESERVATIONS_COLLECTION: &str = "reservations";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Names of the collections holding at least one document.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    async fn insert_booking(&self, record: BookingRecord) -> Result<(), StoreError>;

    /// Booking records, newest first.
    async fn bookings_page(&self, skip: u64, limit: u64)
        -> Result<Vec<BookingRecord>, StoreError>;

    /// Every booking record in insertion order.
    async fn all_bookings(&self) -> Result<Vec<BookingRecord>, StoreError>;

    /// Stores archived trips keyed by `covoiturageId`, replacing any earlier copy of
    /// the same trip. An empty batch is a no-op.
    async fn upsert_reservations(
        &self,
        records: Vec<ReservationRecord>,
    ) -> Result<(), StoreError>;

    /// Every archived trip ordered by trip ID.
    async fn reservations(&self) -> Result<Vec<ReservationRecord>, StoreError>;
}
