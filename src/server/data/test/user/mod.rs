use crate::server::data::user::UserRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod credit_credits;
mod debit_credits;
mod find_by_token_hash;
