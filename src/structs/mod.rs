pub mod cli;
pub mod analytics;
pub mod account;
pub mod config;
