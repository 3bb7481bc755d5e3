use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An active subscription shown on the dashboard plans card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: f64,
    pub data_allowance: String,
    pub renews_on: NaiveDate,
}
