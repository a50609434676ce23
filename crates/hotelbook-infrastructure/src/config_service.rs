//! Configuration service.
//!
//! Loads [`ClientConfig`] from `config.toml`, writing the defaults on first
//! run, then layers the `HOTELBOOK_*` environment overrides on top.

use crate::paths::HotelbookPaths;
use crate::storage::AtomicTomlFile;
use hotelbook_core::Result;
use hotelbook_core::config::ClientConfig;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Loads and caches the client configuration.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<ClientConfig>>,
    /// Cached config with overrides applied.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &HotelbookPaths) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(paths.config_file())),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Returns the effective config using the process environment.
    pub fn get_config(&self) -> Result<ClientConfig> {
        self.get_config_with(|name| std::env::var(name).ok())
    }

    /// Returns the effective config using `lookup` for overrides.
    pub fn get_config_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig> {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let mut config = self.load_or_create()?;
        for name in config.apply_overrides(lookup) {
            tracing::info!(variable = name, "Config value overridden from environment");
        }
        config.validate()?;

        *self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(config.clone());
        Ok(config)
    }

    /// Persists `config` and drops the cache.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        config.validate()?;
        self.file.save(config)?;
        self.invalidate_cache();
        tracing::info!(path = %self.file.path().display(), "Config saved");
        Ok(())
    }

    pub fn invalidate_cache(&self) {
        *self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    fn load_or_create(&self) -> Result<ClientConfig> {
        match self.file.load()? {
            Some(config) => Ok(config),
            None => {
                let config = ClientConfig::default();
                self.file.save(&config)?;
                tracing::info!(path = %self.file.path().display(), "Created default config");
                Ok(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelbook_core::config::{BOOKING_URL_ENV, SEARCH_URL_ENV};
    use tempfile::TempDir;

    fn service(temp_dir: &TempDir) -> ConfigService {
        let paths = HotelbookPaths::new(Some(temp_dir.path().to_path_buf())).unwrap();
        ConfigService::new(&paths)
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let config = service.get_config_with(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(service.path().exists());
    }

    #[test]
    fn test_env_override_is_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let config = service
            .get_config_with(|name| {
                (name == BOOKING_URL_ENV).then(|| "http://bookings:9000/api".to_string())
            })
            .unwrap();
        assert_eq!(config.endpoints.booking, "http://bookings:9000/api");

        let on_disk = std::fs::read_to_string(service.path()).unwrap();
        assert!(on_disk.contains("http://localhost:8003/api/v1"));
    }

    #[test]
    fn test_save_invalidates_cache() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);
        let mut config = service.get_config_with(|_| None).unwrap();

        config.endpoints.search = "http://search.internal/api/v1".to_string();
        service.save(&config).unwrap();

        let reloaded = service.get_config_with(|_| None).unwrap();
        assert_eq!(reloaded.endpoints.search, "http://search.internal/api/v1");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let service = service(&temp_dir);

        let result =
            service.get_config_with(|name| (name == SEARCH_URL_ENV).then(|| "nope".to_string()));
        assert!(result.is_err());
    }
}
