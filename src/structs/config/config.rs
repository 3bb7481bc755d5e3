use serde::{Deserialize, Serialize};
use crate::structs::config::general_config::GeneralConfig;
use crate::structs::config::store_config::StoreConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub store: StoreConfig,
}
