//! Trip services.
//!
//! `TripService` covers the read side (list, search, details, a user's trips) plus
//! trip creation and status changes. Booking and cancellation need the document store
//! and the mailer respectively and live in their own services.
//!
//! Every flow that moves credits or seats runs in one database transaction and relies
//! on the repositories' conditional updates; a rule rejection raised inside the
//! transaction drops it, which rolls everything back.

pub mod booking;
pub mod cancellation;
pub mod creation;
pub mod search;
pub mod status;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{review::ReviewRepository, user::UserRepository},
    model::trip::{round_note, DriverSummary},
};

pub use booking::BookingService;
pub use cancellation::CancellationService;

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Public summary of a driver: pseudo, photo and approved review average.
///
/// # Returns
/// - `Ok(Some(DriverSummary))` - Driver found
/// - `Ok(None)` - No user with that ID
pub(crate) async fn driver_summary<C: ConnectionTrait>(
    db: &C,
    driver_id: i32,
) -> Result<Option<DriverSummary>, sea_orm::DbErr> {
    let Some(driver) = UserRepository::new(db).find_by_id(driver_id).await? else {
        return Ok(None);
    };

    let note = ReviewRepository::new(db)
        .average_for_driver(driver_id)
        .await?
        .map(round_note);

    Ok(Some(DriverSummary {
        id: driver.id,
        pseudo: driver.pseudo,
        photo: driver.photo,
        note,
    }))
}
