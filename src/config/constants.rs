use std::time::Duration;

// Local store keys, unchanged from the web portal's localStorage layout.
pub const USER_KEY: &str = "telecom_user";
pub const ATTENTION_KEY: &str = "attentionData";
pub const CATEGORY_KEY: &str = "categoryData";
pub const CHURN_RISK_KEY: &str = "churnRiskData";
pub const HEALTH_KEY: &str = "healthData";
pub const BILLS_KEY: &str = "bills";
pub const PAYMENT_METHODS_KEY: &str = "paymentMethods";
pub const REWARDS_KEY: &str = "rewardsAccount";

pub const CONFIG_DIR_NAME: &str = ".telcoview";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_DIR_NAME: &str = "store";

// Fake-backend latency, matching the portal's setTimeout values.
pub const SIMULATED_API_DELAY_MS: u64 = 1000;
pub const PAYMENT_PROCESSING_DELAY_MS: u64 = 2000;

/// Fallback forecast when an imported row has no predicted column.
pub const DEFAULT_PREDICTION_FACTOR: f64 = 0.98;

/// Widest gap between `current` and a backfilled `previous` value.
pub const PREVIOUS_BACKFILL_RANGE: f64 = 10.0;

pub const DEFAULT_CURRENCY: &str = "₹";

pub const MONTH_NAMES: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun",
    "jul", "aug", "sep", "oct", "nov", "dec",
    "january", "february", "march", "april", "june",
    "july", "august", "september", "october", "november", "december",
];

pub const QUARTER_LABELS: &[&str] = &["Q1", "Q2", "Q3", "Q4"];

pub fn simulated_delay() -> Duration {
    Duration::from_millis(SIMULATED_API_DELAY_MS)
}

pub fn payment_delay() -> Duration {
    Duration::from_millis(PAYMENT_PROCESSING_DELAY_MS)
}
