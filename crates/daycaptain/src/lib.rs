pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod model;
pub mod schedule;
