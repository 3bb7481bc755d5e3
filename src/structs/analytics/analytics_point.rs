use serde::{Deserialize, Serialize};

/// A labeled time-series sample, monthly or quarterly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPoint {
    pub name: String,
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
}
