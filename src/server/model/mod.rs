//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request DTOs are validated while being converted into parameter types, so services
//! only ever see well-formed input.

pub mod booking;
pub mod brand;
pub mod configuration;
pub mod review;
pub mod role;
pub mod trip;
pub mod user;
pub mod vehicle;
