//! Vehicle factory for creating vehicles owned by a user.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles.
///
/// Defaults to an unbranded electric car with a unique plate.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    brand_id: Option<i32>,
    model: String,
    plate: String,
    energy: String,
    color: String,
}

impl<'a> VehicleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            brand_id: None,
            model: "Zoé".to_string(),
            plate: format!("EC-{}-RD", id),
            energy: "électrique".to_string(),
            color: "bleu".to_string(),
        }
    }

    pub fn brand_id(mut self, brand_id: i32) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    pub fn energy(mut self, energy: impl Into<String>) -> Self {
        self.energy = energy.into();
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            brand_id: ActiveValue::Set(self.brand_id),
            model: ActiveValue::Set(self.model),
            plate: ActiveValue::Set(self.plate),
            energy: ActiveValue::Set(self.energy),
            color: ActiveValue::Set(self.color),
            first_registration: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values for the given owner.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, owner_id).build().await
}
