//! Background jobs.

pub mod history_archive;
