//! Configuration service implementation.
//!
//! Loads [`CounselConfig`] from `config.toml` (explicit path or the user
//! configuration directory), applies `COUNSEL_*` environment overrides and
//! caches the result.

use counsel_core::{CounselConfig, CounselError, TopicKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::paths::CounselPaths;

pub const ENV_TIMEOUT_SECS: &str = "COUNSEL_TIMEOUT_SECS";

/// Environment variable naming the endpoint for a topic,
/// e.g. `COUNSEL_STRENGTHS_ENDPOINT`.
pub fn endpoint_env_var(kind: TopicKind) -> String {
    format!("COUNSEL_{}_ENDPOINT", kind.slug().to_uppercase())
}

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` means the default location.
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<CounselConfig>>>,
}

impl ConfigService {
    /// Service reading from `~/.config/counsel/config.toml`.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Service reading from a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it on first access.
    pub fn get_config(&self) -> Result<CounselConfig, CounselError> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| CounselError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let path = self.resolve_path()?;
        let mut loaded = load_from_path(&path)?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok())?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| CounselError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn resolve_path(&self) -> Result<PathBuf, CounselError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => CounselPaths::config_file(),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a config file. A missing file yields the defaults.
pub fn load_from_path(path: &Path) -> Result<CounselConfig, CounselError> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(CounselConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Applies `COUNSEL_*` overrides. An empty endpoint variable disables the
/// topic's endpoint.
pub fn apply_env_overrides<F>(config: &mut CounselConfig, lookup: F) -> Result<(), CounselError>
where
    F: Fn(&str) -> Option<String>,
{
    for kind in TopicKind::ALL {
        if let Some(endpoint) = lookup(&endpoint_env_var(kind)) {
            let endpoint = endpoint.trim().to_string();
            config
                .endpoints
                .set(kind, (!endpoint.is_empty()).then_some(endpoint));
        }
    }

    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        config.prediction.timeout_secs = raw.trim().parse().map_err(|_| {
            CounselError::config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
        })?;
    }

    Ok(())
}
