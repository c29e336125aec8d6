//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying the marketplace rules (credits, seats, trip status)
//! - **Orchestration**: Coordinating repositories, the document store and the mailer
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running credit and seat movements atomically

pub mod admin;
pub mod auth;
pub mod brand;
pub mod configuration;
pub mod history;
pub mod mail;
pub mod profile;
pub mod review;
pub mod role;
pub mod trip;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
