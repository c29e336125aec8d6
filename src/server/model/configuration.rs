use crate::model::configuration::{ConfigurationDto, ParameterDto, ParameterInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: i32,
    pub configuration_id: i32,
    pub property: String,
    pub value: String,
}

impl Parameter {
    pub fn from_entity(entity: entity::parameter::Model) -> Self {
        Self {
            id: entity.id,
            configuration_id: entity.configuration_id,
            property: entity.property,
            value: entity.value,
        }
    }

    pub fn into_dto(self) -> ParameterDto {
        ParameterDto {
            id: self.id,
            configuration_id: self.configuration_id,
            propriete: self.property,
            valeur: self.value,
        }
    }
}

/// Preference set owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub id: i32,
    pub user_id: i32,
    pub parameters: Vec<Parameter>,
}

impl Configuration {
    pub fn from_entity(
        entity: entity::configuration::Model,
        parameters: Vec<entity::parameter::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            parameters: parameters.into_iter().map(Parameter::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> ConfigurationDto {
        ConfigurationDto {
            id: self.id,
            parametres: self.parameters.into_iter().map(Parameter::into_dto).collect(),
        }
    }
}

/// Key/value pair to store.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInput {
    pub property: String,
    pub value: String,
}

impl ParameterInput {
    /// Trims both sides; pairs with an empty key are dropped.
    pub fn from_dtos(dtos: Vec<ParameterInputDto>) -> Vec<Self> {
        dtos.into_iter()
            .map(|p| Self {
                property: p.propriete.trim().to_string(),
                value: p.valeur.trim().to_string(),
            })
            .filter(|p| !p.property.is_empty())
            .collect()
    }
}
