//! EcoRide backend.
//!
//! A request enters through `router`, reaches a `controller` handler which resolves
//! the caller with `middleware::auth::AuthGuard`, and is handed to a `service`. Services
//! own the carpooling rules and open the transactions; `data` repositories are the only
//! code that touches SeaORM entities and hand back `model` domain types. Booking
//! records and archived trips go to the `store` document backend, and the `scheduler`
//! archives completed trips on a cron tick.
//!
//! `config`, `startup` and `state` cover boot: environment loading, database and
//! document store connections, the SMTP mailer and the bootstrap admin account.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod store;
pub mod util;
