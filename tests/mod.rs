mod csv_parser_tests;
mod csv_exporter_tests;
mod local_store_tests;
mod analytics_tests;
mod auth_tests;
mod billing_tests;
mod rewards_tests;
