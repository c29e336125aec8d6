//! Trip factory for creating trips and their vehicle-usage link.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::trip::TripStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips.
///
/// Defaults: Paris → Lyon on 2030-01-15 from 09:00 to 12:30, 3 seats at 10
/// credits, status `Available`, no vehicle link.
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    departure_place: String,
    arrival_place: String,
    departure_date: NaiveDate,
    departure_time: NaiveTime,
    arrival_date: NaiveDate,
    arrival_time: NaiveTime,
    seats: i32,
    price: i32,
    status: TripStatus,
    vehicle_id: Option<i32>,
}

impl<'a> TripFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let date = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap_or_default();
        Self {
            db,
            departure_place: "Paris".to_string(),
            arrival_place: "Lyon".to_string(),
            departure_date: date,
            departure_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            arrival_date: date,
            arrival_time: NaiveTime::from_hms_opt(12, 30, 0).unwrap_or_default(),
            seats: 3,
            price: 10,
            status: TripStatus::Available,
            vehicle_id: None,
        }
    }

    pub fn route(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_place = departure.into();
        self.arrival_place = arrival.into();
        self
    }

    /// Sets the departure and arrival date to the same day.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.departure_date = date;
        self.arrival_date = date;
        self
    }

    pub fn times(mut self, departure: NaiveTime, arrival: NaiveTime) -> Self {
        self.departure_time = departure;
        self.arrival_time = arrival;
        self
    }

    pub fn seats(mut self, seats: i32) -> Self {
        self.seats = seats;
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: TripStatus) -> Self {
        self.status = status;
        self
    }

    /// Links the trip to a vehicle through the usage table.
    pub fn vehicle_id(mut self, vehicle_id: i32) -> Self {
        self.vehicle_id = Some(vehicle_id);
        self
    }

    /// Builds and inserts the trip, then its vehicle-usage link when set.
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        let trip = entity::trip::ActiveModel {
            departure_place: ActiveValue::Set(self.departure_place),
            arrival_place: ActiveValue::Set(self.arrival_place),
            departure_date: ActiveValue::Set(self.departure_date),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_date: ActiveValue::Set(self.arrival_date),
            arrival_time: ActiveValue::Set(self.arrival_time),
            seats: ActiveValue::Set(self.seats),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if let Some(vehicle_id) = self.vehicle_id {
            entity::trip_vehicle::ActiveModel {
                trip_id: ActiveValue::Set(trip.id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(trip)
    }
}

/// Creates a trip with default values and no vehicle.
pub async fn create_trip(db: &DatabaseConnection) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db).build().await
}
