use entity::{review::ReviewStatus, trip::TripStatus};

use crate::{
    model::review::CreateReviewDto,
    server::{
        error::{trip::TripError, AppError},
        service::review::ReviewService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod moderate;

fn review(note: i32) -> CreateReviewDto {
    CreateReviewDto {
        note: Some(note),
        commentaire: Some("Trajet agréable".to_string()),
    }
}
