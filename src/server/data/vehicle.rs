//! Vehicle data repository.
//!
//! Vehicles belong to one owner and optionally one brand. A trip uses a vehicle
//! through the `trip_vehicle` link.

use entity::trip::TripStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vehicle::{CreateVehicleParams, Vehicle};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a vehicle.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Created vehicle with its brand resolved
    /// - `Err(DbErr)` - Database error, including unique violations on the plate
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            brand_id: ActiveValue::Set(params.brand_id),
            model: ActiveValue::Set(params.model),
            plate: ActiveValue::Set(params.plate),
            energy: ActiveValue::Set(params.energy),
            color: ActiveValue::Set(params.color),
            first_registration: ActiveValue::Set(params.first_registration),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_brand(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        match entity::prelude::Vehicle::find_by_id(id).one(self.db).await? {
            Some(entity) => Ok(Some(self.with_brand(entity).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Plate.eq(plate))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.with_brand(entity).await?)),
            None => Ok(None),
        }
    }

    /// Vehicles owned by a user, with their brand.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Vehicle>, DbErr> {
        let rows = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::OwnerId.eq(owner_id))
            .find_also_related(entity::prelude::Brand)
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(vehicle, brand)| Vehicle::from_entity(vehicle, brand))
            .collect())
    }

    pub async fn owner_has_vehicle(&self, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Vehicle used by a trip, if any.
    pub async fn find_for_trip(&self, trip_id: i32) -> Result<Option<Vehicle>, DbErr> {
        let link = entity::prelude::TripVehicle::find()
            .filter(entity::trip_vehicle::Column::TripId.eq(trip_id))
            .one(self.db)
            .await?;

        match link {
            Some(link) => self.find_by_id(link.vehicle_id).await,
            None => Ok(None),
        }
    }

    /// Links a vehicle to the trip it is used for.
    pub async fn link_to_trip(&self, vehicle_id: i32, trip_id: i32) -> Result<(), DbErr> {
        entity::trip_vehicle::ActiveModel {
            trip_id: ActiveValue::Set(trip_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether the vehicle is used by a trip that is neither cancelled nor completed.
    pub async fn used_by_open_trip(&self, vehicle_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TripVehicle::find()
            .inner_join(entity::prelude::Trip)
            .filter(entity::trip_vehicle::Column::VehicleId.eq(vehicle_id))
            .filter(
                entity::trip::Column::Status
                    .is_not_in([TripStatus::Cancelled, TripStatus::Completed]),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a vehicle and the links of its finished trips.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::TripVehicle::delete_many()
            .filter(entity::trip_vehicle::Column::VehicleId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_brand(&self, entity: entity::vehicle::Model) -> Result<Vehicle, DbErr> {
        let brand = match entity.brand_id {
            Some(brand_id) => {
                entity::prelude::Brand::find_by_id(brand_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Vehicle::from_entity(entity, brand))
    }
}
