use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, STORE_DIR_NAME};
use crate::errors::{PortalError, PortalResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_default()
    }

    pub fn load() -> PortalResult<Config> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| {
                PortalError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    /// Resolve the store directory: config override first, `~/.telcoview/store` otherwise.
    pub fn store_dir(config: &Config) -> PortalResult<PathBuf> {
        if let Some(dir) = &config.store.dir {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(STORE_DIR_NAME))
            .ok_or_else(|| PortalError::system_error("store setup", "home directory not found"))
    }

    pub fn create_sample_config() -> PortalResult<PathBuf> {
        let config_path = Self::config_path();
        if config_path.as_os_str().is_empty() {
            return Err(PortalError::system_error("config setup", "home directory not found"));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if config_path.exists() {
            log::info!("📋 Config already exists at: {}", config_path.display());
            return Ok(config_path);
        }

        let sample_config = r#"# Telcoview configuration

[general]
# Currency symbol used when rendering amounts
currency = "₹"

# Set to false to skip the simulated backend delays
simulate_latency = true

[store]
# Uncomment to relocate the local data store
# dir = "/path/to/store"
"#;

        fs::write(&config_path, sample_config)?;
        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> PortalResult<()> {
        if config.general.currency.is_empty() {
            return Err(PortalError::config_error(
                "currency must not be empty",
                Some("general.currency"),
                Some("use a symbol like ₹ or $"),
            ));
        }

        if let Some(dir) = &config.store.dir {
            if dir.is_empty() {
                return Err(PortalError::config_error(
                    "store dir override must not be empty",
                    Some("store.dir"),
                    Some("remove the key to use the default location"),
                ));
            }
        }

        Ok(())
    }
}
