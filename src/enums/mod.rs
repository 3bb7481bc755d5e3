pub mod commands;
pub mod dataset_kind;
pub mod risk_level;
pub mod bill_status;
pub mod payment_method_kind;
