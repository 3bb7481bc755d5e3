pub mod analytics_point;
pub mod attention_point;
pub mod category_point;
pub mod demographics_point;
pub mod churn_risk_point;
pub mod parsed_analytics;
pub mod health;
pub mod attention_score;
