use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{NaiveDate, NaiveTime};

use crate::server::error::AppError;

/// Parses a `YYYY-MM-DD` date from a request field.
///
/// # Arguments
/// - `value` - Raw field value
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid date
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Format de date invalide pour {}", field)))
}

/// Parses an `HH:MM` or `HH:MM:SS` time from a request field.
pub fn parse_time(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::BadRequest(format!("Format d'heure invalide pour {}", field)))
}

/// Formats a time as `HH:MM` for responses.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Decodes a base64 photo sent by the client.
pub fn decode_photo(value: &str) -> Result<Vec<u8>, AppError> {
    STANDARD
        .decode(value.trim())
        .map_err(|_| AppError::BadRequest("Photo invalide (base64 attendu)".to_string()))
}

/// Encodes a stored photo as base64 for responses.
pub fn encode_photo(photo: &[u8]) -> String {
    STANDARD.encode(photo)
}

/// Minimal email shape check: one `@`, non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
}

/// Returns the trimmed value, or None when missing or blank.
pub fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
