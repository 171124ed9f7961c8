use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CairnConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub retrieval: RetrievalConfig,
    pub suggest: SuggestConfig,
    pub patterns: PatternsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    /// Logical database name; selects the file pair inside `data_dir`.
    pub database: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_limit: usize,
    pub min_score: f64,
    pub recency_window_hours: i64,
    pub recency_bonus: f64,
    pub usefulness_weight: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SuggestConfig {
    pub limit: usize,
    pub min_score: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PatternsConfig {
    pub min_entries: usize,
    pub top_tags: usize,
    pub top_pairs: usize,
    pub top_accessed: usize,
    pub preview_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "127.0.0.1".into(),
            port: 7373,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_cairn_dir().to_string_lossy().into_owned(),
            database: "knowledge".into(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            min_score: 0.1,
            recency_window_hours: 24,
            recency_bonus: 0.10,
            usefulness_weight: 0.05,
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            min_score: 0.05,
        }
    }
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            min_entries: 3,
            top_tags: 10,
            top_pairs: 5,
            top_accessed: 5,
            preview_chars: 120,
        }
    }
}

/// Returns `~/.cairn/`, or `./.cairn/` when no home directory is known.
pub fn default_cairn_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cairn")
}

/// Returns the default config file path: `~/.cairn/config.toml`
pub fn default_config_path() -> PathBuf {
    default_cairn_dir().join("config.toml")
}

impl CairnConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CairnConfig::default()
        };

        config.apply_env_overrides();
        config
            .validate()
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings the ranking cannot represent.
    fn validate(&self) -> Result<()> {
        let hours = self.retrieval.recency_window_hours;
        if hours < 0 {
            bail!("retrieval.recency_window_hours must not be negative (got {hours})");
        }
        if chrono::Duration::try_hours(hours).is_none() {
            bail!("retrieval.recency_window_hours is out of range (got {hours})");
        }
        Ok(())
    }

    /// Apply environment variable overrides (CAIRN_DIR, CAIRN_DB, CAIRN_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CAIRN_DIR") {
            self.storage.data_dir = val;
        }
        if let Ok(val) = std::env::var("CAIRN_DB") {
            self.storage.database = val;
        }
        if let Ok(val) = std::env::var("CAIRN_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the storage directory, expanding `~` if needed.
    pub fn resolved_data_dir(&self) -> PathBuf {
        expand_tilde(&self.storage.data_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
