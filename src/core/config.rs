//! Configuration management for the seekbase service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SeekbaseError};
use crate::core::persist::RetryPolicy;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub fulltext: FulltextConfig,
    #[serde(default)]
    pub persist: PersistConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Fulltext cleanup configuration.
///
/// Word length bounds mirror what the search backend can index;
/// words outside the bounds never reach the cleaned text.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FulltextConfig {
    /// Minimum word length in characters
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Maximum word length in characters
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
}

/// Persistence retry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersistConfig {
    /// Total write attempts per save, including the first
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Lower bound of the randomized retry wait
    #[serde(default = "default_backoff_min_ms")]
    pub retry_backoff_min_ms: u64,

    /// Upper bound of the randomized retry wait
    #[serde(default = "default_backoff_max_ms")]
    pub retry_backoff_max_ms: u64,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the fulltext index
    #[serde(default = "default_index_dir")]
    pub index_dir: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,
}

// Default value functions
fn default_min_word_length() -> usize {
    3
}

fn default_max_word_length() -> usize {
    84
}

fn default_max_retries() -> usize {
    5
}

fn default_backoff_min_ms() -> u64 {
    100
}

fn default_backoff_max_ms() -> u64 {
    500
}

fn default_index_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_k() -> usize {
    10
}

fn default_max_k() -> usize {
    100
}

impl Default for FulltextConfig {
    fn default() -> Self {
        Self {
            min_word_length: default_min_word_length(),
            max_word_length: default_max_word_length(),
        }
    }
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_backoff_min_ms: default_backoff_min_ms(),
            retry_backoff_max_ms: default_backoff_max_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            index_dir: default_index_dir(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SeekbaseError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file
    /// locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SEEKBASE_CONFIG_FILE env var (explicit file, resolved by
    ///    [`XdgDirs::config_file`])
    /// 2. XDG config file (~/.config/seekbase/config.toml)
    /// 3. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let config_path = xdg.config_file();
        let mut config = if config_path.exists() {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Default the index into the XDG data directory unless set
        // explicitly
        if env::var("SEEKBASE_INDEX_DIR").is_err() && config.storage.index_dir == default_index_dir()
        {
            config.storage.index_dir = xdg.index_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(min) = env::var("SEEKBASE_MIN_WORD_LENGTH") {
            if let Ok(v) = min.parse() {
                self.fulltext.min_word_length = v;
            }
        }
        if let Ok(max) = env::var("SEEKBASE_MAX_WORD_LENGTH") {
            if let Ok(v) = max.parse() {
                self.fulltext.max_word_length = v;
            }
        }

        if let Ok(retries) = env::var("SEEKBASE_MAX_RETRIES") {
            if let Ok(v) = retries.parse() {
                self.persist.max_retries = v;
            }
        }
        if let Ok(min_ms) = env::var("SEEKBASE_RETRY_BACKOFF_MIN_MS") {
            if let Ok(v) = min_ms.parse() {
                self.persist.retry_backoff_min_ms = v;
            }
        }
        if let Ok(max_ms) = env::var("SEEKBASE_RETRY_BACKOFF_MAX_MS") {
            if let Ok(v) = max_ms.parse() {
                self.persist.retry_backoff_max_ms = v;
            }
        }

        if let Ok(dir) = env::var("SEEKBASE_INDEX_DIR") {
            self.storage.index_dir = PathBuf::from(dir);
        }

        if let Ok(default_k) = env::var("SEEKBASE_DEFAULT_K") {
            if let Ok(v) = default_k.parse() {
                self.search.default_k = v;
            }
        }
        if let Ok(max_k) = env::var("SEEKBASE_MAX_K") {
            if let Ok(v) = max_k.parse() {
                self.search.max_k = v;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.fulltext.min_word_length == 0 {
            return Err(SeekbaseError::ConfigError(
                "Min word length must be non-zero".to_string(),
            ));
        }

        if self.fulltext.min_word_length > self.fulltext.max_word_length {
            return Err(SeekbaseError::ConfigError(
                "Min word length cannot exceed max word length".to_string(),
            ));
        }

        if self.persist.max_retries == 0 {
            return Err(SeekbaseError::ConfigError(
                "Max retries must be non-zero".to_string(),
            ));
        }

        if self.persist.retry_backoff_min_ms > self.persist.retry_backoff_max_ms {
            return Err(SeekbaseError::ConfigError(
                "Retry backoff min cannot exceed max".to_string(),
            ));
        }

        if self.search.default_k == 0 {
            return Err(SeekbaseError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(SeekbaseError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        Ok(())
    }

    /// Retry policy derived from the persist section
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.persist.max_retries,
            backoff_min: Duration::from_millis(self.persist.retry_backoff_min_ms),
            backoff_max: Duration::from_millis(self.persist.retry_backoff_max_ms),
        }
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Min word length: {}", self.fulltext.min_word_length);
        tracing::info!("  Max word length: {}", self.fulltext.max_word_length);
        tracing::info!("  Max retries: {}", self.persist.max_retries);
        tracing::info!(
            "  Retry backoff: {}..{}ms",
            self.persist.retry_backoff_min_ms,
            self.persist.retry_backoff_max_ms
        );
        tracing::info!("  Index dir: {:?}", self.storage.index_dir);
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Max k: {}", self.search.max_k);
    }
}
