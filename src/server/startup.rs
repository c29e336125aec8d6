use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::{admin::AdminService, mail::MailService},
    store::{DocumentStore, MemoryDocumentStore, MongoDocumentStore},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration
/// (SQLite or PostgreSQL), then runs all pending SeaORM migrations so the schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Opens the document store.
///
/// Uses MongoDB when `MONGODB_URL` is set. Without it bookings are mirrored into a
/// process-local store, which is lost on restart.
///
/// # Returns
/// - `Ok(Arc<dyn DocumentStore>)` - Store ready for use
/// - `Err(AppError::StoreErr)` - MongoDB configured but unreachable
pub async fn connect_to_document_store(
    config: &Config,
) -> Result<Arc<dyn DocumentStore>, AppError> {
    let Some(url) = config.mongodb_url.as_deref() else {
        tracing::warn!("MONGODB_URL not set, booking records are kept in memory");
        return Ok(Arc::new(MemoryDocumentStore::new()));
    };

    let store = MongoDocumentStore::connect(
        url,
        &config.mongodb_database,
        Duration::from_secs(config.mongodb_timeout_secs),
    )
    .await?;

    tracing::info!("Connected to MongoDB database {}", config.mongodb_database);

    Ok(Arc::new(store))
}

/// Builds the mail service from the SMTP settings.
pub fn setup_mailer(config: &Config) -> MailService {
    let mail = MailService::new(config.smtp.clone());

    if !mail.is_enabled() {
        tracing::warn!("SMTP_HOST or SMTP_FROM not set, outgoing mail is disabled");
    }

    mail
}

/// Ensures an administrator exists.
///
/// When no user holds the admin role and `ADMIN_EMAIL` / `ADMIN_PASSWORD` are set,
/// the admin account is created from them. Otherwise a warning is logged; admin
/// routes stay unreachable until one is created.
///
/// # Returns
/// - `Ok(())` - Admin present, created, or warned about
/// - `Err(AppError)` - Database error or invalid bootstrap credentials
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let admin_service = AdminService::new(db);

    if admin_service.admin_exists().await? {
        return Ok(());
    }

    match &config.admin {
        Some(bootstrap) => {
            let admin = admin_service
                .create_admin(&bootstrap.email, &bootstrap.password)
                .await?;

            tracing::info!("Created admin account {}", admin.user.email);
        }
        None => {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one at startup"
            );
        }
    }

    Ok(())
}
