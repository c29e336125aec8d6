use crate::server::data::trip::TripRepository;
use chrono::NaiveDate;
use entity::trip::TripStatus;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod mark_full_if_no_seats;
mod next_available_date;
mod release_seat;
mod search_available;
mod take_seat;
mod transition;
