//! Configuration and parameter repositories.
//!
//! A configuration is a preference set owned by a user; its parameters are key/value
//! rows. Every lookup is scoped to the owning user.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::configuration::{Configuration, Parameter, ParameterInput};

pub struct ConfigurationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfigurationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Configurations of a user with their parameters.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Configuration>, DbErr> {
        let rows = entity::prelude::Configuration::find()
            .filter(entity::configuration::Column::UserId.eq(user_id))
            .order_by_asc(entity::configuration::Column::Id)
            .find_with_related(entity::prelude::Parameter)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(configuration, parameters)| Configuration::from_entity(configuration, parameters))
            .collect())
    }

    /// A configuration, only if it belongs to the user.
    pub async fn find_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Configuration>, DbErr> {
        let Some(configuration) = entity::prelude::Configuration::find_by_id(id)
            .filter(entity::configuration::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let parameters = entity::prelude::Parameter::find()
            .filter(entity::parameter::Column::ConfigurationId.eq(id))
            .order_by_asc(entity::parameter::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Configuration::from_entity(configuration, parameters)))
    }

    pub async fn create(&self, user_id: i32) -> Result<Configuration, DbErr> {
        let entity = entity::configuration::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Configuration::from_entity(entity, Vec::new()))
    }

    /// The user's first configuration, created when the user has none.
    pub async fn first_or_create(&self, user_id: i32) -> Result<Configuration, DbErr> {
        match self.get_by_user(user_id).await?.into_iter().next() {
            Some(configuration) => Ok(configuration),
            None => self.create(user_id).await,
        }
    }

    /// Replaces every parameter of a configuration.
    pub async fn replace_parameters(
        &self,
        configuration_id: i32,
        parameters: Vec<ParameterInput>,
    ) -> Result<(), DbErr> {
        entity::prelude::Parameter::delete_many()
            .filter(entity::parameter::Column::ConfigurationId.eq(configuration_id))
            .exec(self.db)
            .await?;

        let parameter_repo = ParameterRepository::new(self.db);
        for parameter in parameters {
            parameter_repo
                .create(configuration_id, parameter.property, parameter.value)
                .await?;
        }

        Ok(())
    }

    /// Deletes a configuration and its parameters.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Parameter::delete_many()
            .filter(entity::parameter::Column::ConfigurationId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Configuration::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Every parameter across a user's configurations, used as driver preferences.
    pub async fn preferences_of(&self, user_id: i32) -> Result<Vec<ParameterInput>, DbErr> {
        Ok(ParameterRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .into_iter()
            .map(|p| ParameterInput {
                property: p.property,
                value: p.value,
            })
            .collect())
    }
}

pub struct ParameterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParameterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        configuration_id: i32,
        property: String,
        value: String,
    ) -> Result<Parameter, DbErr> {
        let entity = entity::parameter::ActiveModel {
            configuration_id: ActiveValue::Set(configuration_id),
            property: ActiveValue::Set(property),
            value: ActiveValue::Set(value),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Parameter::from_entity(entity))
    }

    /// Parameters of every configuration owned by the user.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Parameter>, DbErr> {
        let entities = entity::prelude::Parameter::find()
            .inner_join(entity::prelude::Configuration)
            .filter(entity::configuration::Column::UserId.eq(user_id))
            .order_by_asc(entity::parameter::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Parameter::from_entity).collect())
    }

    /// A parameter, only if its configuration belongs to the user.
    pub async fn find_for_user(&self, id: i32, user_id: i32) -> Result<Option<Parameter>, DbErr> {
        let entity = entity::prelude::Parameter::find_by_id(id)
            .inner_join(entity::prelude::Configuration)
            .filter(entity::configuration::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Parameter::from_entity))
    }

    /// Updates the given fields of a parameter.
    pub async fn update(
        &self,
        id: i32,
        property: Option<String>,
        value: Option<String>,
    ) -> Result<Parameter, DbErr> {
        let mut active = entity::parameter::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(property) = property {
            active.property = ActiveValue::Set(property);
        }
        if let Some(value) = value {
            active.value = ActiveValue::Set(value);
        }

        if !active.is_changed() {
            let entity = entity::prelude::Parameter::find_by_id(id)
                .one(self.db)
                .await?
                .ok_or(DbErr::RecordNotUpdated)?;
            return Ok(Parameter::from_entity(entity));
        }

        let entity = active.update(self.db).await?;

        Ok(Parameter::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Parameter::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
