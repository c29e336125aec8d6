use sea_orm::EntityTrait;

use crate::{
    model::{
        configuration::ParameterInputDto,
        profile::{DriverVehicleDto, RegisterDriverDto, UpdateStatusDto},
    },
    server::{
        data::configuration::ConfigurationRepository,
        error::{auth::AuthError, AppError},
        model::user::{User, UserWithRoles},
        service::profile::ProfileService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod register_driver;
mod set_status;

fn caller(user: entity::user::Model, roles: &[&str]) -> UserWithRoles {
    UserWithRoles {
        user: User::from_entity(user),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}
