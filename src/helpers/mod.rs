pub mod config_helper;
pub mod data_helper;
