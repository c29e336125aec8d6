use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub id: i32,
    pub libelle: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BrandPayloadDto {
    pub libelle: Option<String>,
}
