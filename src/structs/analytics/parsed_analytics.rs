use serde::{Deserialize, Serialize};
use crate::structs::analytics::analytics_point::AnalyticsPoint;
use crate::structs::analytics::category_point::CategoryPoint;
use crate::structs::analytics::churn_risk_point::ChurnRiskPoint;
use crate::structs::analytics::demographics_point::DemographicsPoint;

/// Result of a CSV upload. A successful parse populates at most one field;
/// a failed parse leaves all of them `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedAnalytics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_data: Option<Vec<AnalyticsPoint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterly_data: Option<Vec<AnalyticsPoint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_data: Option<Vec<CategoryPoint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub demographics_data: Option<Vec<DemographicsPoint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub churn_risk_data: Option<Vec<ChurnRiskPoint>>,
}

impl ParsedAnalytics {
    pub fn is_empty(&self) -> bool {
        self.monthly_data.is_none()
            && self.quarterly_data.is_none()
            && self.category_data.is_none()
            && self.demographics_data.is_none()
            && self.churn_risk_data.is_none()
    }
}
