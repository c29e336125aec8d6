//! Outgoing mail over SMTP.
//!
//! Mail is a side channel: every public method logs delivery failures and returns
//! normally, so a broken SMTP relay never fails the request that triggered the mail.
//! When SMTP is not configured the service warns and skips.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::server::{config::SmtpConfig, model::trip::Trip};

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build mail: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[derive(Clone, Default)]
pub struct MailService {
    config: Option<SmtpConfig>,
}

impl MailService {
    pub fn new(config: Option<SmtpConfig>) -> Self {
        Self { config }
    }

    /// Service that only logs; used when SMTP is not configured and in tests.
    pub fn disabled() -> Self {
        Self { config: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Tells a rider that the driver cancelled their trip and that they were refunded.
    pub async fn send_trip_cancelled(&self, to: &str, name: &str, trip: &Trip, refund: i32) {
        let subject = format!(
            "Annulation de votre covoiturage {} → {}",
            trip.departure_place, trip.arrival_place
        );
        let body = format!(
            "Bonjour {},\n\n\
             Le chauffeur a annulé le covoiturage {} → {} prévu le {} à {}.\n\
             {} crédits ont été recrédités sur votre compte.\n\n\
             L'équipe EcoRide",
            name,
            trip.departure_place,
            trip.arrival_place,
            trip.departure_date,
            trip.departure_time.format("%H:%M"),
            refund
        );

        self.deliver(to, &subject, body).await;
    }

    /// Sends the password-reset link.
    pub async fn send_password_reset(&self, to: &str, name: &str, link: &str) {
        let body = format!(
            "Bonjour {},\n\n\
             Pour choisir un nouveau mot de passe, suivez ce lien (valable une heure) :\n\
             {}\n\n\
             Si vous n'êtes pas à l'origine de cette demande, ignorez ce message.\n\n\
             L'équipe EcoRide",
            name, link
        );

        self.deliver(to, "Réinitialisation de votre mot de passe", body)
            .await;
    }

    async fn deliver(&self, to: &str, subject: &str, body: String) {
        let Some(config) = &self.config else {
            tracing::warn!("SMTP not configured, skipping mail '{}' to {}", subject, to);
            return;
        };

        match send(config, to, subject, body).await {
            Ok(()) => tracing::info!(to = %to, subject = %subject, "Mail sent"),
            Err(err) => tracing::error!("Failed to send mail '{}' to {}: {}", subject, to, err),
        }
    }
}

async fn send(config: &SmtpConfig, to: &str, subject: &str, body: String) -> Result<(), MailError> {
    let from: Mailbox = config.from.parse()?;
    let to: Mailbox = to.parse()?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body)?;

    let mailer = if config.tls {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
    }
    .port(config.port);

    let mailer = match (&config.username, &config.password) {
        (Some(username), Some(password)) => {
            mailer.credentials(Credentials::new(username.clone(), password.clone()))
        }
        _ => mailer,
    };

    mailer.build().send(message).await?;

    Ok(())
}
