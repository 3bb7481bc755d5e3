use serde::{Deserialize, Serialize};

/// Current-vs-previous comparison for a satisfaction category
/// (network, price, billing, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub name: String,
    pub current: f64,
    pub previous: f64,
}
