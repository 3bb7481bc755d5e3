pub mod user;
pub mod bill;
pub mod payment_method;
pub mod reward;
pub mod plan;
