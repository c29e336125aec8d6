use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::vehicle::Vehicle,
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Vehicles owned by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Vehicle>)` - At least one vehicle
    /// - `Err(AppError::NotFound)` - The user owns no vehicle
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = VehicleRepository::new(self.db).get_by_owner(owner_id).await?;

        if vehicles.is_empty() {
            return Err(AppError::NotFound(
                "Aucun véhicule trouvé pour cet utilisateur".to_string(),
            ));
        }

        Ok(vehicles)
    }

    /// Deletes one of the caller's vehicles.
    ///
    /// # Returns
    /// - `Ok(())` - Vehicle and its trip links removed
    /// - `Err(AppError::NotFound)` - Unknown vehicle or owned by someone else
    /// - `Err(AppError::Conflict)` - Vehicle used by a trip still open
    pub async fn delete(&self, owner_id: i32, vehicle_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let vehicles = VehicleRepository::new(&txn);

        let owned = vehicles
            .find_by_id(vehicle_id)
            .await?
            .is_some_and(|v| v.owner_id == owner_id);
        if !owned {
            return Err(AppError::NotFound("Véhicule introuvable".to_string()));
        }

        if vehicles.used_by_open_trip(vehicle_id).await? {
            return Err(AppError::Conflict(
                "Ce véhicule est utilisé par un covoiturage en cours".to_string(),
            ));
        }

        vehicles.delete(vehicle_id).await?;
        txn.commit().await?;

        tracing::info!("User {} deleted vehicle {}", owner_id, vehicle_id);

        Ok(())
    }
}
