//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! for quick default creation. Factories insert rows directly and never run business
//! rules, so tests can seed any state (empty trips, broke riders, suspended users).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let rider = factory::user::UserFactory::new(&db).credits(20).build().await?;
//! let (driver, vehicle, trip) = factory::helpers::create_trip_with_driver(&db).await?;
//! factory::participation::create_passenger(&db, rider.id, trip.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with credits, flags and optional API token hash
//! - `role` - Roles and user-role links
//! - `brand` - Vehicle brands
//! - `vehicle` - Vehicles owned by a user
//! - `trip` - Trips and their vehicle-usage link
//! - `participation` - Driver and passenger participations
//! - `review` - Reviews left on a trip
//! - `configuration` - Preference configurations and their parameters
//! - `helpers` - Unique ids and multi-entity setups

pub mod brand;
pub mod configuration;
pub mod helpers;
pub mod participation;
pub mod review;
pub mod role;
pub mod trip;
pub mod user;
pub mod vehicle;

pub use brand::create_brand;
pub use participation::{create_driver, create_passenger};
pub use role::{assign_role, create_role};
pub use trip::create_trip;
pub use user::create_user;
pub use vehicle::create_vehicle;
