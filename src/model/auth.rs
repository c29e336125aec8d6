use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload. Every field is optional on the wire so that missing
/// fields produce a 400 with a readable message.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub pseudo: Option<String>,
    /// Only `client` is accepted.
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseDto {
    pub message: String,
    pub email: String,
    pub role: String,
    pub api_token: String,
    pub credits: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub email: String,
    pub api_token: String,
    pub role: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub email: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordConfirmDto {
    pub token: Option<String>,
    pub password: Option<String>,
}
