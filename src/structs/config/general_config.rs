use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "ConfigHelper::default_currency")]
    pub currency: String,

    /// When false the fake-backend delays are skipped entirely.
    #[serde(default = "ConfigHelper::default_simulate_latency")]
    pub simulate_latency: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            currency: ConfigHelper::default_currency(),
            simulate_latency: ConfigHelper::default_simulate_latency(),
        }
    }
}
