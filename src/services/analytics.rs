use crate::config::constants::{ATTENTION_KEY, CATEGORY_KEY, CHURN_RISK_KEY, HEALTH_KEY};
use crate::errors::PortalResult;
use crate::helpers::data_helper::DataHelper;
use crate::services::local_store::LocalStore;
use crate::structs::analytics::attention_point::AttentionPoint;
use crate::structs::analytics::attention_score::AttentionScore;
use crate::structs::analytics::category_point::CategoryPoint;
use crate::structs::analytics::churn_risk_point::ChurnRiskPoint;
use crate::structs::analytics::health::HealthData;
use crate::structs::analytics::parsed_analytics::ParsedAnalytics;

/// The dashboard datasets, loaded from the store with seeded defaults.
#[derive(Debug, Clone)]
pub struct AnalyticsData {
    pub attention: Vec<AttentionPoint>,
    pub category: Vec<CategoryPoint>,
    pub churn_risk: Vec<ChurnRiskPoint>,
    pub health: HealthData,
}

pub struct AnalyticsService<'a> {
    store: &'a LocalStore,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    pub fn load(&self) -> AnalyticsData {
        AnalyticsData {
            attention: self.store.get_or(ATTENTION_KEY, DataHelper::default_attention_data()),
            category: self.store.get_or(CATEGORY_KEY, DataHelper::default_category_data()),
            churn_risk: self.store.get_or(CHURN_RISK_KEY, DataHelper::default_churn_risk_data()),
            health: self.store.get_or(HEALTH_KEY, DataHelper::default_health_data()),
        }
    }

    /// Latest attention value and the delta against the previous sample.
    /// An empty series scores 0/0; a single sample counts its full value
    /// as the change.
    pub fn attention_score(points: &[AttentionPoint]) -> AttentionScore {
        let Some(current) = points.last() else {
            return AttentionScore::default();
        };

        let previous = if points.len() >= 2 {
            points[points.len() - 2].value
        } else {
            0.0
        };

        AttentionScore {
            score: current.value,
            change: current.value - previous,
        }
    }

    /// Replace dashboard datasets with the results of a CSV upload.
    /// Returns the names of the datasets that were updated.
    pub fn apply_import(&self, parsed: ParsedAnalytics) -> PortalResult<Vec<&'static str>> {
        let mut updated = Vec::new();

        if let Some(monthly) = parsed.monthly_data {
            if !monthly.is_empty() {
                let attention: Vec<AttentionPoint> =
                    monthly.into_iter().map(AttentionPoint::from).collect();
                self.store.set(ATTENTION_KEY, &attention)?;
                updated.push("attention");
            }
        }

        if let Some(quarterly) = parsed.quarterly_data {
            if !quarterly.is_empty() {
                // Quarterly uploads drive the same attention chart.
                let attention: Vec<AttentionPoint> =
                    quarterly.into_iter().map(AttentionPoint::from).collect();
                self.store.set(ATTENTION_KEY, &attention)?;
                updated.push("attention");
            }
        }

        if let Some(category) = parsed.category_data {
            if !category.is_empty() {
                self.store.set(CATEGORY_KEY, &category)?;
                updated.push("category");
            }
        }

        if let Some(churn_risk) = parsed.churn_risk_data {
            if !churn_risk.is_empty() {
                self.store.set(CHURN_RISK_KEY, &churn_risk)?;
                updated.push("churn-risk");
            }
        }

        if let Some(demographics) = parsed.demographics_data {
            // Parsed for completeness; the dashboard has no demographics card.
            log::info!("ℹ️ Parsed {} demographics rows (not shown on the dashboard)", demographics.len());
        }

        Ok(updated)
    }

    /// Restore every dataset to its seeded default.
    pub fn reset(&self) -> PortalResult<()> {
        self.store.set(ATTENTION_KEY, &DataHelper::default_attention_data())?;
        self.store.set(CATEGORY_KEY, &DataHelper::default_category_data())?;
        self.store.set(CHURN_RISK_KEY, &DataHelper::default_churn_risk_data())?;
        self.store.set(HEALTH_KEY, &DataHelper::default_health_data())?;
        Ok(())
    }
}
