use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::history::HistoryService, store::DocumentStore};

/// Starts the history archive scheduler.
///
/// On every tick of `cron`, completed trips that are not archived yet are copied into
/// the `reservations` collection. The same archive runs on demand when the history
/// endpoint is called, so a missed tick only delays the copy.
///
/// # Arguments
/// - `db`: Database connection
/// - `documents`: Document store receiving the archive
/// - `cron`: Six-field cron expression (seconds first)
pub async fn start_scheduler(
    db: DatabaseConnection,
    documents: Arc<dyn DocumentStore>,
    cron: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let db = db.clone();
        let documents = documents.clone();

        Box::pin(async move {
            if let Err(e) = HistoryService::new(&db, documents.as_ref())
                .archive_completed()
                .await
            {
                tracing::error!("Error archiving completed trips: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("History archive scheduler started ({})", cron);

    Ok(())
}
