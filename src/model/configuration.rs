use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDto {
    pub id: i32,
    pub configuration_id: i32,
    pub propriete: String,
    pub valeur: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigurationDto {
    pub id: i32,
    pub parametres: Vec<ParameterDto>,
}

/// A key/value pair sent by the client (preferences, parameter sets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParameterInputDto {
    pub propriete: String,
    pub valeur: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateConfigurationDto {
    #[serde(default)]
    pub parametres: Vec<ParameterInputDto>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParameterDto {
    pub configuration_id: Option<i32>,
    pub propriete: Option<String>,
    pub valeur: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateParameterDto {
    pub propriete: Option<String>,
    pub valeur: Option<String>,
}
