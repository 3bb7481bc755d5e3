use serde::{Deserialize, Serialize};

/// One of the four dashboard health scores (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub score: u32,
    pub label: String,
    pub color: String,
}

impl HealthMetric {
    pub fn new(score: u32, label: &str, color: &str) -> Self {
        Self {
            score,
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthData {
    pub loyalty: HealthMetric,
    pub churn: HealthMetric,
    pub satisfaction: HealthMetric,
    pub payments: HealthMetric,
}
