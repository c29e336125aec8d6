use entity::trip::TripStatus;
use sea_orm::EntityTrait;

use crate::server::{
    error::{trip::TripError, AppError},
    model::{booking::BookingOutcome, user::User},
    service::trip::booking::BookingService,
    store::{memory::MemoryDocumentStore, DocumentStore},
};
use test_utils::{builder::TestBuilder, factory};

mod participate;
