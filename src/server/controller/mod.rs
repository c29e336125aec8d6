//! HTTP handlers.
//!
//! Each handler authenticates the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard)
//! when the route is protected, delegates to a service and converts the result to a DTO.
//! Every handler carries a `#[utoipa::path]` annotation collected by the router's
//! OpenAPI document.

pub mod admin;
pub mod auth;
pub mod brand;
pub mod configuration;
pub mod history;
pub mod profile;
pub mod review;
pub mod role;
pub mod trip;
pub mod vehicle;

#[cfg(test)]
mod test;
