pub mod checkin;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod notifier;
pub mod request;
pub mod response;
pub mod transport;
