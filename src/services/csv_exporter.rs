use crate::enums::dataset_kind::DatasetKind;
use crate::errors::{PortalError, PortalResult};
use crate::services::analytics::AnalyticsData;
use crate::structs::analytics::attention_point::AttentionPoint;
use crate::structs::analytics::category_point::CategoryPoint;
use crate::structs::analytics::churn_risk_point::ChurnRiskPoint;

/// Writes dashboard datasets back out as CSV, in the same shapes the
/// parser accepts.
pub struct CsvExporter;

impl CsvExporter {
    pub fn export_dataset(kind: DatasetKind, data: &AnalyticsData) -> PortalResult<String> {
        match kind {
            DatasetKind::Monthly => Ok(Self::export_attention(&data.attention)),
            DatasetKind::Category => Ok(Self::export_category(&data.category)),
            DatasetKind::ChurnRisk => Ok(Self::export_churn_risk(&data.churn_risk)),
            DatasetKind::Quarterly | DatasetKind::Demographics => {
                Err(PortalError::validation_error(
                    "kind",
                    kind.name(),
                    "dataset is not persisted on the dashboard",
                    Some("exportable datasets: monthly, category, churn-risk"),
                ))
            }
        }
    }

    pub fn export_attention(points: &[AttentionPoint]) -> String {
        let mut out = String::from("name,value,predicted\n");
        for point in points {
            out.push_str(&format!("{},{},{}\n", point.name, point.value, point.predicted));
        }
        out
    }

    pub fn export_category(points: &[CategoryPoint]) -> String {
        let mut out = String::from("category,current,previous\n");
        for point in points {
            out.push_str(&format!("{},{},{}\n", point.name, point.current, point.previous));
        }
        out
    }

    pub fn export_churn_risk(points: &[ChurnRiskPoint]) -> String {
        // Color is derived from the label on re-parse, so it is not exported.
        let mut out = String::from("risk,value\n");
        for point in points {
            out.push_str(&format!("{},{}\n", point.name, point.value));
        }
        out
    }

    /// A well-formed example file for each dataset shape.
    pub fn sample_csv(kind: DatasetKind) -> &'static str {
        match kind {
            DatasetKind::Monthly => {
                "month,value,predicted\nJan,65,67\nFeb,59,62\nMar,80,76\nApr,81,79\n"
            }
            DatasetKind::Quarterly => "quarter,value\nQ1,120\nQ2,135\nQ3,128\nQ4,142\n",
            DatasetKind::Category => {
                "category,current,previous\nNetwork,65,55\nPrice,45,49\nBilling,82,75\n"
            }
            DatasetKind::Demographics => "age,percentage\n18-24,22\n25-34,38\n35-54,32\n55+,8\n",
            DatasetKind::ChurnRisk => "risk,value\nLow Risk,60\nMedium Risk,25\nHigh Risk,15\n",
        }
    }
}
