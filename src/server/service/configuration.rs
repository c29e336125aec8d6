//! Preference sets (configurations) and their key/value parameters.
//!
//! Every operation is scoped to the calling user: a configuration or parameter owned
//! by someone else is reported as not found.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::configuration::{CreateParameterDto, UpdateConfigurationDto, UpdateParameterDto},
    server::{
        data::configuration::{ConfigurationRepository, ParameterRepository},
        error::AppError,
        model::configuration::{Configuration, Parameter, ParameterInput},
        util::parse::required,
    },
};

pub struct ConfigurationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfigurationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Configuration>, AppError> {
        Ok(ConfigurationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Configuration, AppError> {
        ConfigurationRepository::new(self.db)
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(configuration_not_found)
    }

    /// Creates an empty configuration.
    pub async fn create(&self, user_id: i32) -> Result<Configuration, AppError> {
        Ok(ConfigurationRepository::new(self.db).create(user_id).await?)
    }

    /// Replaces the whole parameter set of a configuration.
    ///
    /// # Returns
    /// - `Ok(Configuration)` - Configuration with its new parameters
    /// - `Err(AppError::NotFound)` - Unknown configuration or not the caller's
    pub async fn replace(
        &self,
        user_id: i32,
        id: i32,
        dto: UpdateConfigurationDto,
    ) -> Result<Configuration, AppError> {
        let txn = self.db.begin().await?;
        let repo = ConfigurationRepository::new(&txn);

        if repo.find_for_user(id, user_id).await?.is_none() {
            return Err(configuration_not_found());
        }

        repo.replace_parameters(id, ParameterInput::from_dtos(dto.parametres))
            .await?;
        let configuration = repo
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(configuration_not_found)?;

        txn.commit().await?;

        Ok(configuration)
    }

    /// Deletes a configuration and its parameters.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = ConfigurationRepository::new(self.db);

        if repo.find_for_user(id, user_id).await?.is_none() {
            return Err(configuration_not_found());
        }

        repo.delete(id).await?;

        Ok(())
    }
}

pub struct ParameterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParameterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Parameter>, AppError> {
        Ok(ParameterRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Parameter, AppError> {
        ParameterRepository::new(self.db)
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(parameter_not_found)
    }

    /// Adds a parameter to one of the caller's configurations.
    ///
    /// Without `configurationId` the caller's first configuration is used, created
    /// when the caller has none.
    ///
    /// # Returns
    /// - `Ok(Parameter)` - Created parameter
    /// - `Err(AppError::BadRequest)` - Missing `propriete` or `valeur`
    /// - `Err(AppError::NotFound)` - `configurationId` unknown or not the caller's
    pub async fn create(&self, user_id: i32, dto: CreateParameterDto) -> Result<Parameter, AppError> {
        let (Some(property), Some(value)) = (required(dto.propriete), required(dto.valeur))
        else {
            return Err(AppError::BadRequest(
                "Propriété et valeur obligatoires".to_string(),
            ));
        };

        let txn = self.db.begin().await?;
        let configurations = ConfigurationRepository::new(&txn);

        let configuration = match dto.configuration_id {
            Some(id) => configurations
                .find_for_user(id, user_id)
                .await?
                .ok_or_else(configuration_not_found)?,
            None => configurations.first_or_create(user_id).await?,
        };

        let parameter = ParameterRepository::new(&txn)
            .create(configuration.id, property, value)
            .await?;

        txn.commit().await?;

        Ok(parameter)
    }

    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        dto: UpdateParameterDto,
    ) -> Result<Parameter, AppError> {
        let repo = ParameterRepository::new(self.db);

        if repo.find_for_user(id, user_id).await?.is_none() {
            return Err(parameter_not_found());
        }

        Ok(repo
            .update(id, required(dto.propriete), required(dto.valeur))
            .await?)
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = ParameterRepository::new(self.db);

        if repo.find_for_user(id, user_id).await?.is_none() {
            return Err(parameter_not_found());
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn configuration_not_found() -> AppError {
    AppError::NotFound("Configuration introuvable".to_string())
}

fn parameter_not_found() -> AppError {
    AppError::NotFound("Paramètre introuvable".to_string())
}
