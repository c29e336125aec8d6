mod admin;
mod auth;
mod booking;
mod cancellation;
mod history;
mod profile;
mod review;
