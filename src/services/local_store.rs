use std::fs;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::config_manager::ConfigManager;
use crate::errors::{PortalError, PortalResult};
use crate::structs::config::config::Config;

/// File-per-key JSON store, the portal's `localStorage` stand-in.
///
/// Every `set` overwrites the key wholesale; there is no merging and no
/// history. Keys map to `<dir>/<key>.json`.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> PortalResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| PortalError::system_error("store setup", &e.to_string()))?;
        Ok(Self { dir })
    }

    pub fn open_default(config: &Config) -> PortalResult<Self> {
        Self::new(ConfigManager::store_dir(config)?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> PortalResult<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| PortalError::store_error(key, "read", &e.to_string()))?;
        let value = serde_json::from_str(&content).map_err(|e| {
            PortalError::parse_error(
                "stored JSON",
                Some(e.line()),
                &e.to_string(),
                Some(key),
            )
        })?;

        Ok(Some(value))
    }

    /// Read a key, falling back to `default` when the key is absent or the
    /// stored blob cannot be read.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                log::warn!("⚠️ Falling back to default for '{}': {}", key, e);
                default
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> PortalResult<()> {
        let path = self.key_path(key);
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| PortalError::store_error(key, "serialize", &e.to_string()))?;

        // Write-then-rename so a crash never leaves a half-written blob.
        let tmp_path = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp_path, content)
            .map_err(|e| PortalError::store_error(key, "write", &e.to_string()))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| PortalError::store_error(key, "write", &e.to_string()))?;

        Ok(())
    }

    pub fn remove(&self, key: &str) -> PortalResult<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| PortalError::store_error(key, "remove", &e.to_string()))?;
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    pub fn clear(&self) -> PortalResult<()> {
        for entry in fs::read_dir(&self.dir)
            .map_err(|e| PortalError::system_error("store clear", &e.to_string()))?
        {
            let entry = entry.map_err(|e| PortalError::system_error("store clear", &e.to_string()))?;
            let path = entry.path();
            if path.extension().map(|ext| ext == "json").unwrap_or(false) {
                fs::remove_file(&path)
                    .map_err(|e| PortalError::system_error("store clear", &e.to_string()))?;
            }
        }
        Ok(())
    }
}
