use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub id: i32,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub credits: i32,
    pub is_active: bool,
    pub roles: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SuspendUserDto {
    pub raison: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeDto {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyTripsDto {
    /// `YYYY-MM-DD`
    pub jour: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyCreditsDto {
    pub jour: String,
    pub credits: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub covoiturages: Vec<DailyTripsDto>,
    pub credits: Vec<DailyCreditsDto>,
    pub total_credits: i64,
}
