use serde::{Deserialize, Serialize};

/// Churn-risk buckets and the chart colors attached to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    /// Classify a row label by substring, case-insensitive.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("low") {
            Self::Low
        } else if lower.contains("medium") {
            Self::Medium
        } else if lower.contains("high") {
            Self::High
        } else {
            Self::Unknown
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#4ade80",
            Self::Medium => "#facc15",
            Self::High => "#ef4444",
            Self::Unknown => "#3B82F6",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Unknown => "OTHER",
        }
    }
}
