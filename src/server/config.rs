use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MONGODB_DATABASE: &str = "ecoride";
const DEFAULT_HISTORY_ARCHIVE_CRON: &str = "0 0 * * * *";

/// SMTP settings; mail is disabled when absent.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub tls: bool,
}

/// Credentials of the administrator created on first start.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    pub mongodb_url: Option<String>,
    pub mongodb_database: String,
    pub mongodb_timeout_secs: u64,

    pub smtp: Option<SmtpConfig>,
    pub admin: Option<AdminBootstrap>,

    pub history_archive_cron: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let smtp = match (optional("SMTP_HOST"), optional("SMTP_FROM")) {
            (Some(host), Some(from)) => Some(SmtpConfig {
                host,
                port: parse_or("SMTP_PORT", 587)?,
                username: optional("SMTP_USERNAME"),
                password: optional("SMTP_PASSWORD"),
                from,
                tls: parse_or("SMTP_TLS", true)?,
            }),
            _ => None,
        };

        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            mongodb_url: optional("MONGODB_URL"),
            mongodb_database: optional("MONGODB_DATABASE")
                .unwrap_or_else(|| DEFAULT_MONGODB_DATABASE.to_string()),
            mongodb_timeout_secs: parse_or("MONGODB_TIMEOUT_SECS", 5)?,
            smtp,
            admin,
            history_archive_cron: optional("HISTORY_ARCHIVE_CRON")
                .unwrap_or_else(|| DEFAULT_HISTORY_ARCHIVE_CRON.to_string()),
            rate_limit_per_second: parse_or("RATE_LIMIT_PER_SECOND", 2)?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 10)?,
        })
    }
}

/// Reads a variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
