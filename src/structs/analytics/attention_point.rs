use serde::{Deserialize, Serialize};
use crate::structs::analytics::analytics_point::AnalyticsPoint;
use crate::config::constants::DEFAULT_PREDICTION_FACTOR;

/// Attention chart sample. Unlike [`AnalyticsPoint`] the prediction is
/// mandatory so the chart always has both lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionPoint {
    pub name: String,
    pub value: f64,
    pub predicted: f64,
}

impl From<AnalyticsPoint> for AttentionPoint {
    fn from(point: AnalyticsPoint) -> Self {
        let predicted = point.predicted.unwrap_or(point.value * DEFAULT_PREDICTION_FACTOR);
        Self {
            name: point.name,
            value: point.value,
            predicted,
        }
    }
}
