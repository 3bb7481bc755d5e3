pub mod config;
pub mod general_config;
pub mod store_config;
