mod model;
mod server;

use std::net::SocketAddr;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router::{self, RateLimit},
    scheduler::history_archive,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ecoride=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let documents = startup::connect_to_document_store(&config).await?;
    let mail = startup::setup_mailer(&config);

    tracing::info!("Starting server");

    // Create the bootstrap admin or warn when none exists
    startup::check_for_admin(&db, &config).await?;

    // Start history archive scheduler
    let scheduler_db = db.clone();
    let scheduler_documents = documents.clone();
    let scheduler_cron = config.history_archive_cron.clone();
    tokio::spawn(async move {
        if let Err(e) =
            history_archive::start_scheduler(scheduler_db, scheduler_documents, scheduler_cron)
                .await
        {
            tracing::error!("History archive scheduler error: {}", e);
        }
    });

    let app = router::router(Some(RateLimit::from_config(&config)))?
        .with_state(AppState::new(
            db,
            documents,
            mail,
            config.app_url.clone(),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
