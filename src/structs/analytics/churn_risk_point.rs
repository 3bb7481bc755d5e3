use serde::{Deserialize, Serialize};
use crate::enums::risk_level::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnRiskPoint {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl ChurnRiskPoint {
    pub fn new(name: String, value: f64) -> Self {
        let color = RiskLevel::from_label(&name).color().to_string();
        Self { name, value, color }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_label(&self.name)
    }
}
