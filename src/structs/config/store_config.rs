use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StoreConfig {
    /// Overrides the default `~/.telcoview/store` location.
    #[serde(default)]
    pub dir: Option<String>,
}
