use crate::config::constants::DEFAULT_CURRENCY;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_currency() -> String {
        DEFAULT_CURRENCY.to_string()
    }

    pub fn default_simulate_latency() -> bool {
        true
    }
}
