//! Handles shared by every request.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{service::mail::MailService, store::DocumentStore};

/// Cloned into each handler by axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Booking mirror and trip archive. MongoDB when configured, in-memory otherwise.
    pub documents: Arc<dyn DocumentStore>,

    /// Logs and skips sends when SMTP is not configured.
    pub mail: MailService,

    /// Base URL used in password-reset links.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        documents: Arc<dyn DocumentStore>,
        mail: MailService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            documents,
            mail,
            app_url,
        }
    }
}
