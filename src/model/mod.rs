//! Wire DTOs shared by the HTTP layer.
//!
//! Field names are serialized in camelCase French to match the public API
//! (`lieuDepart`, `creditsRestants`, ...).

pub mod admin;
pub mod api;
pub mod auth;
pub mod brand;
pub mod configuration;
pub mod document;
pub mod profile;
pub mod review;
pub mod role;
pub mod trip;
pub mod vehicle;
