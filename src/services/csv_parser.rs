use crate::config::constants::{MONTH_NAMES, PREVIOUS_BACKFILL_RANGE, QUARTER_LABELS};
use crate::enums::dataset_kind::DatasetKind;
use crate::errors::{PortalError, PortalResult};
use crate::structs::analytics::analytics_point::AnalyticsPoint;
use crate::structs::analytics::category_point::CategoryPoint;
use crate::structs::analytics::churn_risk_point::ChurnRiskPoint;
use crate::structs::analytics::demographics_point::DemographicsPoint;
use crate::structs::analytics::parsed_analytics::ParsedAnalytics;
use rand::Rng;

const CSV_CONTENT_TYPE: &str = "analytics CSV";

const NAME_ALIASES: &[&str] = &["name", "month", "quarter", "period"];
const VALUE_ALIASES: &[&str] = &["value", "actual"];
const PREDICTED_ALIASES: &[&str] = &["predicted", "forecast"];
const CATEGORY_NAME_ALIASES: &[&str] = &["name", "category"];
const CURRENT_ALIASES: &[&str] = &["current", "value"];
const PREVIOUS_ALIASES: &[&str] = &["previous", "old"];
const DEMOGRAPHIC_NAME_ALIASES: &[&str] = &["name", "age", "demographic"];
const PERCENTAGE_ALIASES: &[&str] = &["value", "percentage"];
const RISK_NAME_ALIASES: &[&str] = &["name", "risk", "category"];

const RISK_WORDS: &[&str] = &["risk", "low", "medium", "high"];

/// Shape-inference parser for uploaded analytics CSV files.
///
/// Guesses which of the five known dataset shapes the file represents
/// (header keywords first, first-column values as a fallback) and parses
/// the rows into that shape. At most one field of the returned
/// [`ParsedAnalytics`] is populated.
pub struct AnalyticsCsvParser {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AnalyticsCsvParser {
    pub fn new(content: &str) -> Self {
        let mut lines = content.lines();

        let headers = lines
            .next()
            .map(|line| line.split(',').map(|h| h.trim().to_string()).collect())
            .unwrap_or_default();

        let rows = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(',').map(|v| v.trim().to_string()).collect())
            .collect();

        Self { headers, rows }
    }

    pub fn parse(&self) -> PortalResult<ParsedAnalytics> {
        if self.headers.is_empty() {
            return Err(PortalError::parse_error(
                CSV_CONTENT_TYPE,
                Some(1),
                "missing header row",
                None,
            ));
        }

        match self.detect_kind() {
            DatasetKind::Monthly | DatasetKind::Quarterly => self.parse_time_series(),
            DatasetKind::Category => self.parse_category(),
            DatasetKind::Demographics => self.parse_demographics(),
            DatasetKind::ChurnRisk => self.parse_churn_risk(),
        }
    }

    /// Pick a parser branch. Header keywords win; ambiguous headers fall back
    /// to inspecting first-column values. Time series is reported as
    /// `Monthly` here and refined to `Quarterly` after row mapping.
    pub fn detect_kind(&self) -> DatasetKind {
        if self.header_matches(&["month", "name"]) {
            DatasetKind::Monthly
        } else if self.header_matches(&["category"]) {
            DatasetKind::Category
        } else if self.header_matches(&["demographic", "age"]) {
            DatasetKind::Demographics
        } else if self.header_matches(&["risk"]) {
            DatasetKind::ChurnRisk
        } else {
            self.infer_kind_from_rows()
        }
    }

    fn header_matches(&self, keywords: &[&str]) -> bool {
        self.headers.iter().any(|header| {
            let lower = header.to_lowercase();
            keywords.iter().any(|keyword| lower.contains(keyword))
        })
    }

    fn infer_kind_from_rows(&self) -> DatasetKind {
        let first_column: Vec<String> = self
            .rows
            .iter()
            .filter_map(|row| row.first())
            .map(|v| v.to_lowercase())
            .collect();

        let has_months = first_column
            .iter()
            .any(|value| MONTH_NAMES.iter().any(|month| value.contains(month)));
        if has_months {
            return DatasetKind::Monthly;
        }

        let has_quarters = first_column
            .iter()
            .any(|value| ["q1", "q2", "q3", "q4"].iter().any(|q| value.contains(q)));
        if has_quarters {
            return DatasetKind::Monthly;
        }

        // Age ranges look like "18-24" or "55+"
        let has_demographics = first_column
            .iter()
            .any(|value| (value.contains('-') && value.contains('+')) || value.contains("age"));
        if has_demographics {
            return DatasetKind::Demographics;
        }

        let has_risk_words = first_column
            .iter()
            .any(|value| RISK_WORDS.iter().any(|word| value.contains(word)));
        if has_risk_words {
            return DatasetKind::ChurnRisk;
        }

        DatasetKind::Category
    }

    /// Find a column by fuzzy alias match: case-insensitive substring,
    /// first hit wins.
    fn header_index(&self, aliases: &[&str]) -> Option<usize> {
        self.headers.iter().position(|header| {
            let lower = header.to_lowercase();
            aliases.iter().any(|alias| lower.contains(alias))
        })
    }

    fn cell<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }

    /// Numeric cells mirror JavaScript parseFloat: junk becomes NaN,
    /// never a dropped row.
    fn number(&self, row: &[String], index: usize) -> f64 {
        self.cell(row, index).parse().unwrap_or(f64::NAN)
    }

    fn parse_time_series(&self) -> PortalResult<ParsedAnalytics> {
        let name_index = self.header_index(NAME_ALIASES);
        let value_index = self.header_index(VALUE_ALIASES);
        let predicted_index = self.header_index(PREDICTED_ALIASES);

        let (name_index, value_index) = match (name_index, value_index) {
            (Some(n), Some(v)) => (n, v),
            _ => {
                return Err(PortalError::parse_error(
                    CSV_CONTENT_TYPE,
                    Some(1),
                    "time-series columns not found",
                    Some("expected a name/month column and a value column"),
                ))
            }
        };

        let data: Vec<AnalyticsPoint> = self
            .rows
            .iter()
            .map(|row| AnalyticsPoint {
                name: self.cell(row, name_index).to_string(),
                value: self.number(row, value_index),
                predicted: predicted_index.map(|index| self.number(row, index)),
            })
            .collect();

        let is_quarterly = data.iter().any(|point| {
            point.name.contains('Q')
                || QUARTER_LABELS.contains(&point.name.as_str())
                || (!point.name.is_empty() && point.name.len() <= 2)
        });

        if is_quarterly {
            Ok(ParsedAnalytics {
                quarterly_data: Some(data),
                ..Default::default()
            })
        } else {
            Ok(ParsedAnalytics {
                monthly_data: Some(data),
                ..Default::default()
            })
        }
    }

    fn parse_category(&self) -> PortalResult<ParsedAnalytics> {
        let name_index = self.header_index(CATEGORY_NAME_ALIASES);
        let current_index = self.header_index(CURRENT_ALIASES);
        let previous_index = self.header_index(PREVIOUS_ALIASES);

        let (name_index, current_index) = match (name_index, current_index) {
            (Some(n), Some(c)) => (n, c),
            _ => {
                return Err(PortalError::parse_error(
                    CSV_CONTENT_TYPE,
                    Some(1),
                    "category columns not found",
                    Some("expected a name/category column and a current/value column"),
                ))
            }
        };

        let mut rng = rand::thread_rng();

        let data: Vec<CategoryPoint> = self
            .rows
            .iter()
            .map(|row| {
                let current = self.number(row, current_index);
                // No previous column: approximate one just below current.
                let previous = match previous_index {
                    Some(index) => self.number(row, index),
                    None => current - rng.gen_range(0.0..PREVIOUS_BACKFILL_RANGE),
                };

                CategoryPoint {
                    name: self.cell(row, name_index).to_string(),
                    current,
                    previous,
                }
            })
            .collect();

        Ok(ParsedAnalytics {
            category_data: Some(data),
            ..Default::default()
        })
    }

    fn parse_demographics(&self) -> PortalResult<ParsedAnalytics> {
        let name_index = self.header_index(DEMOGRAPHIC_NAME_ALIASES);
        let value_index = self.header_index(PERCENTAGE_ALIASES);

        let (name_index, value_index) = match (name_index, value_index) {
            (Some(n), Some(v)) => (n, v),
            _ => {
                return Err(PortalError::parse_error(
                    CSV_CONTENT_TYPE,
                    Some(1),
                    "demographics columns not found",
                    Some("expected a name/age column and a value/percentage column"),
                ))
            }
        };

        let data: Vec<DemographicsPoint> = self
            .rows
            .iter()
            .map(|row| DemographicsPoint {
                name: self.cell(row, name_index).to_string(),
                value: self.number(row, value_index),
            })
            .collect();

        Ok(ParsedAnalytics {
            demographics_data: Some(data),
            ..Default::default()
        })
    }

    fn parse_churn_risk(&self) -> PortalResult<ParsedAnalytics> {
        let name_index = self.header_index(RISK_NAME_ALIASES);
        let value_index = self.header_index(PERCENTAGE_ALIASES);

        let (name_index, value_index) = match (name_index, value_index) {
            (Some(n), Some(v)) => (n, v),
            _ => {
                return Err(PortalError::parse_error(
                    CSV_CONTENT_TYPE,
                    Some(1),
                    "churn-risk columns not found",
                    Some("expected a name/risk column and a value/percentage column"),
                ))
            }
        };

        let data: Vec<ChurnRiskPoint> = self
            .rows
            .iter()
            .map(|row| {
                ChurnRiskPoint::new(
                    self.cell(row, name_index).to_string(),
                    self.number(row, value_index),
                )
            })
            .collect();

        Ok(ParsedAnalytics {
            churn_risk_data: Some(data),
            ..Default::default()
        })
    }
}

/// Best-effort façade: a parse failure is logged and swallowed, and the
/// caller gets an empty result. Use [`AnalyticsCsvParser::parse`] directly
/// when diagnostics matter.
pub fn parse_analytics_csv(content: &str) -> ParsedAnalytics {
    match AnalyticsCsvParser::new(content).parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("❌ Error parsing analytics CSV: {}", e);
            ParsedAnalytics::default()
        }
    }
}
