use entity::trip::TripStatus;
use sea_orm::EntityTrait;

use crate::server::{
    error::{trip::TripError, AppError},
    model::{booking::CancelOutcome, user::User},
    service::{mail::MailService, trip::cancellation::CancellationService},
};
use test_utils::{builder::TestBuilder, factory};


async fn credits_of(db: &sea_orm::DatabaseConnection, user_id: i32) -> Result<i32, AppError> {
    Ok(entity::prelude::User::find_by_id(user_id)
        .one(db)
        .await?
        .map(|u| u.credits)
        .unwrap_or_default())
}
