//! SeaORM entity definitions for the EcoRide schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations are
//! stored once as foreign keys or join rows; inverse views are obtained through
//! the `Related` implementations.

pub mod prelude;

pub mod brand;
pub mod configuration;
pub mod parameter;
pub mod participation;
pub mod review;
pub mod role;
pub mod trip;
pub mod trip_vehicle;
pub mod user;
pub mod user_role;
pub mod vehicle;
