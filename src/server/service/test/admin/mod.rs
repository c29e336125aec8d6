use chrono::NaiveDate;
use sea_orm::EntityTrait;

use crate::{
    model::admin::{CreateEmployeeDto, DailyCreditsDto, DailyTripsDto},
    server::{error::AppError, service::admin::AdminService},
};
use test_utils::{builder::TestBuilder, factory};

mod create_employee;
mod suspend;
