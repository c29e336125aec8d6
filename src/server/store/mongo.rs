use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client, Collection, Database, IndexModel,
};

use crate::{
    model::document::{BookingRecord, ReservationRecord},
    server::store::{
        DocumentStore, StoreError, PARTICIPATIONS_COLLECTION, RESERVATIONS_COLLECTION,
    },
};

/// MongoDB-backed document store.
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    /// Connects, pings the server and ensures the unique `covoiturageId` index on
    /// the archive.
    ///
    /// # Arguments
    /// - `uri` - MongoDB connection string
    /// - `database` - Database name
    /// - `timeout` - Used for both the connect and the server selection timeout
    ///
    /// # Returns
    /// - `Ok(MongoDocumentStore)` - Server reachable
    /// - `Err(StoreError::Mongo)` - Invalid URI or server unreachable within `timeout`
    pub async fn connect(
        uri: &str,
        database: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some("ecoride".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }).await?;

        let store = Self { database };
        store
            .reservations_collection()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "covoiturageId": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await?;

        Ok(store)
    }

    fn bookings(&self) -> Collection<BookingRecord> {
        self.database.collection(PARTICIPATIONS_COLLECTION)
    }

    fn reservations_collection(&self) -> Collection<ReservationRecord> {
        self.database.collection(RESERVATIONS_COLLECTION)
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = self.database.list_collection_names().await?;
        names.sort();
        Ok(names)
    }

    async fn insert_booking(&self, record: BookingRecord) -> Result<(), StoreError> {
        self.bookings().insert_one(record).await?;
        Ok(())
    }

    async fn bookings_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<BookingRecord>, StoreError> {
        let cursor = self
            .bookings()
            .find(doc! {})
            .sort(doc! { "dateParticipation": -1 })
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn all_bookings(&self) -> Result<Vec<BookingRecord>, StoreError> {
        let cursor = self
            .bookings()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn upsert_reservations(
        &self,
        records: Vec<ReservationRecord>,
    ) -> Result<(), StoreError> {
        let collection = self.reservations_collection();
        for record in records {
            collection
                .replace_one(doc! { "covoiturageId": record.covoiturage_id }, record)
                .upsert(true)
                .await?;
        }
        Ok(())
    }

    async fn reservations(&self) -> Result<Vec<ReservationRecord>, StoreError> {
        let cursor = self
            .reservations_collection()
            .find(doc! {})
            .sort(doc! { "covoiturageId": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}
