pub mod csv_parser;
pub mod csv_exporter;
pub mod local_store;
pub mod analytics;
pub mod auth;
pub mod billing;
pub mod rewards;
pub mod dashboard;
