//! EcoRide Test Utils
//!
//! Shared testing utilities for the EcoRide server. Tests build an in-memory SQLite
//! database with only the tables they need, then seed it through the factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, trips, vehicles and related rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_seat() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_marketplace_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (driver, vehicle, trip) = factory::helpers::create_trip_with_driver(db).await?;
//!     // Exercise the booking flow...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
