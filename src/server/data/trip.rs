//! Trip data repository.
//!
//! Besides CRUD, this repository holds the guarded seat and status updates used by the
//! booking and cancellation flows. Each guarded update is a single conditional `UPDATE`
//! and reports through its return value whether the row matched.

use chrono::{NaiveDate, Utc};
use entity::trip::TripStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::trip::{CreateTripParams, Trip};

/// Repository providing database operations for trips.
pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    /// Creates a new TripRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a trip.
    ///
    /// The driver participation and the vehicle link are written separately by the
    /// caller inside the same transaction.
    pub async fn create(&self, params: &CreateTripParams) -> Result<Trip, DbErr> {
        let entity = entity::trip::ActiveModel {
            departure_place: ActiveValue::Set(params.departure_place.clone()),
            arrival_place: ActiveValue::Set(params.arrival_place.clone()),
            departure_date: ActiveValue::Set(params.departure_date),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_date: ActiveValue::Set(params.arrival_date),
            arrival_time: ActiveValue::Set(params.arrival_time),
            seats: ActiveValue::Set(params.seats),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(entity))
    }

    /// Finds a trip by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Trip found
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Trip>, DbErr> {
        let entity = entity::prelude::Trip::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Trip::from_entity))
    }

    /// Returns every trip ordered by departure date then time.
    pub async fn get_all(&self) -> Result<Vec<Trip>, DbErr> {
        let entities = entity::prelude::Trip::find()
            .order_by_asc(entity::trip::Column::DepartureDate)
            .order_by_asc(entity::trip::Column::DepartureTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trip::from_entity).collect())
    }

    /// Returns trips in the given status.
    pub async fn get_by_status(&self, status: TripStatus) -> Result<Vec<Trip>, DbErr> {
        let entities = entity::prelude::Trip::find()
            .filter(entity::trip::Column::Status.eq(status))
            .order_by_asc(entity::trip::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trip::from_entity).collect())
    }

    /// Bookable trips on a route and date with at least one free seat.
    ///
    /// # Arguments
    /// - `departure_place` - Exact departure place
    /// - `arrival_place` - Exact arrival place
    /// - `date` - Departure date
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)` - Matching trips ordered by departure time
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_available(
        &self,
        departure_place: &str,
        arrival_place: &str,
        date: NaiveDate,
    ) -> Result<Vec<Trip>, DbErr> {
        let entities = entity::prelude::Trip::find()
            .filter(entity::trip::Column::DeparturePlace.eq(departure_place))
            .filter(entity::trip::Column::ArrivalPlace.eq(arrival_place))
            .filter(entity::trip::Column::DepartureDate.eq(date))
            .filter(entity::trip::Column::Seats.gt(0))
            .filter(entity::trip::Column::Status.is_in(TripStatus::BOOKABLE))
            .order_by_asc(entity::trip::Column::DepartureTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trip::from_entity).collect())
    }

    /// First departure date after `date` on the route with a bookable trip.
    ///
    /// Used as the hint returned by an empty search.
    pub async fn next_available_date(
        &self,
        departure_place: &str,
        arrival_place: &str,
        date: NaiveDate,
    ) -> Result<Option<NaiveDate>, DbErr> {
        entity::prelude::Trip::find()
            .select_only()
            .column(entity::trip::Column::DepartureDate)
            .filter(entity::trip::Column::DeparturePlace.eq(departure_place))
            .filter(entity::trip::Column::ArrivalPlace.eq(arrival_place))
            .filter(entity::trip::Column::DepartureDate.gt(date))
            .filter(entity::trip::Column::Seats.gt(0))
            .filter(entity::trip::Column::Status.is_in(TripStatus::BOOKABLE))
            .order_by_asc(entity::trip::Column::DepartureDate)
            .into_tuple::<NaiveDate>()
            .one(self.db)
            .await
    }

    /// Takes one seat if the trip is bookable and has a seat left.
    ///
    /// # Returns
    /// - `Ok(true)` - Seat taken
    /// - `Ok(false)` - No seat left or trip not bookable; nothing written
    pub async fn take_seat(&self, trip_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(
                entity::trip::Column::Seats,
                Expr::cust_with_values("seats - ?", [1]),
            )
            .filter(entity::trip::Column::Id.eq(trip_id))
            .filter(entity::trip::Column::Seats.gt(0))
            .filter(entity::trip::Column::Status.is_in(TripStatus::BOOKABLE))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gives one seat back while the trip can still be cancelled.
    ///
    /// # Returns
    /// - `Ok(true)` - Seat released
    /// - `Ok(false)` - Trip missing, cancelled or completed
    pub async fn release_seat(&self, trip_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(
                entity::trip::Column::Seats,
                Expr::cust_with_values("seats + ?", [1]),
            )
            .filter(entity::trip::Column::Id.eq(trip_id))
            .filter(entity::trip::Column::Status.is_in(TripStatus::CANCELLABLE))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves the trip from one of `from` to `to`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Trip was not in any of the `from` statuses
    pub async fn transition(
        &self,
        trip_id: i32,
        from: &[TripStatus],
        to: TripStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(entity::trip::Column::Status, Expr::value(to))
            .filter(entity::trip::Column::Id.eq(trip_id))
            .filter(entity::trip::Column::Status.is_in(from.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks a bookable trip as full once its last seat is taken.
    pub async fn mark_full_if_no_seats(&self, trip_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Trip::update_many()
            .col_expr(entity::trip::Column::Status, Expr::value(TripStatus::Full))
            .filter(entity::trip::Column::Id.eq(trip_id))
            .filter(entity::trip::Column::Seats.eq(0))
            .filter(entity::trip::Column::Status.is_in(TripStatus::BOOKABLE))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Departure dates of every trip, used for the daily statistics.
    pub async fn departure_dates(&self) -> Result<Vec<NaiveDate>, DbErr> {
        entity::prelude::Trip::find()
            .select_only()
            .column(entity::trip::Column::DepartureDate)
            .order_by_asc(entity::trip::Column::DepartureDate)
            .into_tuple()
            .all(self.db)
            .await
    }
}
