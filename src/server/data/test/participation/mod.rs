use crate::server::data::participation::ParticipationRepository;
use chrono::NaiveDate;
use entity::participation::ParticipationRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod participants_of;
mod trips_of_user;
