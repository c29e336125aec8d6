//! Profile of the authenticated user and driver onboarding.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::profile::{RegisterDriverDto, UpdateProfileDto, UpdateStatusDto},
    server::{
        data::{
            brand::BrandRepository,
            configuration::{ConfigurationRepository, ParameterRepository},
            user::UserRepository,
            vehicle::VehicleRepository,
        },
        error::{auth::AuthError, is_unique_violation, AppError},
        model::{
            configuration::ParameterInput,
            user::{UpdateProfileParams, UserWithRoles},
            vehicle::{CreateVehicleParams, DriverVehicleInput, Vehicle},
        },
        service::user::UserService,
        util::parse::required,
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(UserWithRoles)` - Updated profile
    /// - `Err(AppError::BadRequest)` - Malformed birth date or photo
    pub async fn update(
        &self,
        user_id: i32,
        dto: UpdateProfileDto,
    ) -> Result<UserWithRoles, AppError> {
        let params = UpdateProfileParams::from_dto(dto)?;

        let user = UserRepository::new(self.db)
            .update_profile(user_id, params)
            .await?;

        UserService::new(self.db).with_roles(user).await
    }

    /// Sets the driver and passenger flags of a user.
    ///
    /// A user may change their own flags; admins may change anyone's.
    ///
    /// # Arguments
    /// - `caller` - Authenticated caller
    /// - `dto` - Target email and the flags to set; absent flags are kept
    ///
    /// # Returns
    /// - `Ok(UserWithRoles)` - Target user with the new flags
    /// - `Err(AppError::BadRequest)` - Email missing
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the target nor an admin
    /// - `Err(AppError::NotFound)` - No user with that email
    pub async fn set_status(
        &self,
        caller: &UserWithRoles,
        dto: UpdateStatusDto,
    ) -> Result<UserWithRoles, AppError> {
        let Some(email) = required(dto.email).map(|e| e.to_lowercase()) else {
            return Err(AppError::BadRequest("Email obligatoire".to_string()));
        };

        if caller.user.email != email && !caller.is_admin() {
            return Err(AuthError::AccessDenied(
                caller.user.id,
                format!("attempted to change the flags of {}", email),
            )
            .into());
        }

        let users = UserRepository::new(self.db);
        let Some(target) = users.find_by_email(&email).await? else {
            return Err(AppError::NotFound("Utilisateur introuvable".to_string()));
        };

        users
            .set_flags(target.id, dto.is_chauffeur, dto.is_passager)
            .await?;

        UserService::new(self.db)
            .get_with_roles(target.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Utilisateur introuvable".to_string()))
    }

    /// Registers the caller as a driver with their vehicle and preferences.
    ///
    /// The brand is created when unknown. The vehicle, the preferences (appended to
    /// the caller's first configuration) and the driver flag are written in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - Registered vehicle
    /// - `Err(AppError::BadRequest)` - Missing vehicle field or brand
    /// - `Err(AppError::Conflict)` - Plate already registered
    pub async fn register_driver(
        &self,
        user_id: i32,
        dto: RegisterDriverDto,
    ) -> Result<Vehicle, AppError> {
        let Some(vehicle) = dto.voiture else {
            return Err(AppError::BadRequest(
                "Informations du véhicule obligatoires".to_string(),
            ));
        };
        let vehicle = DriverVehicleInput::from_dto(vehicle)?;
        let Some(brand) = required(dto.marque) else {
            return Err(AppError::BadRequest("Marque obligatoire".to_string()));
        };

        if let Some(existing) = VehicleRepository::new(self.db)
            .find_by_plate(&vehicle.plate)
            .await?
        {
            return Err(plate_taken(existing.owner_id == user_id));
        }

        let txn = self.db.begin().await?;

        let brand = BrandRepository::new(&txn).get_or_create(&brand).await?;

        let created = VehicleRepository::new(&txn)
            .create(CreateVehicleParams {
                owner_id: user_id,
                brand_id: Some(brand.id),
                model: vehicle.model,
                plate: vehicle.plate,
                energy: vehicle.energy,
                color: vehicle.color,
                first_registration: Some(vehicle.first_registration),
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    plate_taken(false)
                } else {
                    err.into()
                }
            })?;

        let preferences = ParameterInput::from_dtos(dto.preferences);
        if !preferences.is_empty() {
            let configuration = ConfigurationRepository::new(&txn)
                .first_or_create(user_id)
                .await?;
            let parameters = ParameterRepository::new(&txn);
            for preference in preferences {
                parameters
                    .create(configuration.id, preference.property, preference.value)
                    .await?;
            }
        }

        UserRepository::new(&txn)
            .set_flags(user_id, Some(true), None)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} registered as driver with vehicle {}",
            user_id,
            created.id
        );

        Ok(created)
    }
}

fn plate_taken(own_vehicle: bool) -> AppError {
    if own_vehicle {
        AppError::Conflict("Ce véhicule est déjà enregistré sur votre compte".to_string())
    } else {
        AppError::Conflict("Cette immatriculation est déjà enregistrée".to_string())
    }
}
