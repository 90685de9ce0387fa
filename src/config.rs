use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::theme::Theme;

pub const DEFAULT_BASE_URL: &str = "https://www.dictionary.com/browse/";
pub const DEFAULT_WORD_LIST_FILE: &str = "dictionary.txt";
pub const DEFAULT_ERROR_LOG_FILE: &str = "error_log.txt";
pub const LOG_FILE: &str = "wordbook.log";

/// Configuration for wordbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page URL prefix; the word is appended as the last path segment
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,

    /// Where the word list and error log live. Defaults to the user data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub word_list_file: String,
    pub error_log_file: String,

    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("wordbook/", env!("CARGO_PKG_VERSION")).to_string(),
            data_dir: None,
            word_list_file: DEFAULT_WORD_LIST_FILE.to_string(),
            error_log_file: DEFAULT_ERROR_LOG_FILE.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Load config from the config directory
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(path) = Self::get_config_path() else {
            return Ok(None);
        };
        self.save_to(&path)?;
        Ok(Some(path))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordbook").join("config.toml"))
    }

    /// Initialize default config file
    pub fn init_default() -> Result<Option<PathBuf>> {
        Config::default().save()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("wordbook")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn word_list_path(&self) -> PathBuf {
        self.data_dir().join(&self.word_list_file)
    }

    pub fn error_log_path(&self) -> PathBuf {
        self.data_dir().join(&self.error_log_file)
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.data_dir().join(LOG_FILE)
    }
}
