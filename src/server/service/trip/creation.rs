use entity::participation::ParticipationRole;
use sea_orm::TransactionTrait;

use crate::{
    model::trip::CreateTripDto,
    server::{
        data::{
            participation::ParticipationRepository, trip::TripRepository, user::UserRepository,
            vehicle::VehicleRepository,
        },
        error::{trip::TripError, AppError},
        model::{
            booking::PLATFORM_FEE,
            trip::{CreateTripParams, Trip},
            user::User,
        },
        service::trip::TripService,
    },
};

impl<'a> TripService<'a> {
    /// Publishes a trip for a driver.
    ///
    /// Checks run in this order: driver flag, request fields, at least one registered
    /// vehicle, ownership of the chosen vehicle, then the 2-credit fee. The fee debit,
    /// the trip row, the driver participation and the vehicle link are written in one
    /// transaction.
    ///
    /// # Arguments
    /// - `driver` - Authenticated caller
    /// - `dto` - Trip fields
    ///
    /// # Returns
    /// - `Ok((Trip, i32))` - Created trip and the driver's remaining credits
    /// - `Err(TripError::NotDriver)` - Caller is not flagged as a driver (403)
    /// - `Err(AppError::BadRequest)` - Missing or inconsistent field (400)
    /// - `Err(TripError::NoVehicle)` - Caller owns no vehicle (400)
    /// - `Err(TripError::VehicleNotOwned)` - Vehicle missing or owned by someone else (403)
    /// - `Err(TripError::InsufficientCredits)` - Fewer than 2 credits (402)
    pub async fn create(&self, driver: &User, dto: CreateTripDto) -> Result<(Trip, i32), AppError> {
        if !driver.is_driver {
            return Err(TripError::NotDriver(driver.id).into());
        }

        let params = CreateTripParams::from_dto(dto)?;

        let vehicles = VehicleRepository::new(self.db);
        if !vehicles.owner_has_vehicle(driver.id).await? {
            return Err(TripError::NoVehicle(driver.id).into());
        }

        let owned = vehicles
            .find_by_id(params.vehicle_id)
            .await?
            .is_some_and(|v| v.owner_id == driver.id);
        if !owned {
            return Err(TripError::VehicleNotOwned {
                user_id: driver.id,
                vehicle_id: params.vehicle_id,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        if !users.debit_credits(driver.id, PLATFORM_FEE).await? {
            let available = users.credits(driver.id).await?.unwrap_or(0);
            return Err(TripError::InsufficientCredits {
                required: PLATFORM_FEE,
                available,
            }
            .into());
        }

        let trip = TripRepository::new(&txn).create(&params).await?;
        ParticipationRepository::new(&txn)
            .create(driver.id, trip.id, ParticipationRole::Driver)
            .await?;
        VehicleRepository::new(&txn)
            .link_to_trip(params.vehicle_id, trip.id)
            .await?;

        let remaining = users.credits(driver.id).await?.unwrap_or(0);

        txn.commit().await?;

        tracing::info!(
            "User {} published trip {} ({} → {})",
            driver.id,
            trip.id,
            trip.departure_place,
            trip.arrival_place
        );

        Ok((trip, remaining))
    }
}
