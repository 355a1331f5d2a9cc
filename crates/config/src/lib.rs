//! Configuration loading, validation, and management for Soapbox.
//!
//! Loads configuration from `~/.soapbox/config.toml` with environment
//! variable overrides. Validates all settings at startup. Every field has a
//! default, so a missing config file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.soapbox/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model name passed to the gateway
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the inference service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum words allowed per extracted claim
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Additional extraction attempts after the first
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Seconds to sleep between statements (simple rate limiting)
    #[serde(default)]
    pub sleep_secs: f64,

    /// Statement text is clipped to this many characters before prompting
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Sampling temperature for generation
    #[serde(default)]
    pub temperature: f32,

    /// Maximum tokens the model may generate per attempt
    #[serde(default = "default_num_predict")]
    pub num_predict: u32,

    /// HTTP timeout for one gateway round-trip; generous because local
    /// inference can be very slow
    #[serde(default = "default_gateway_timeout_secs")]
    pub gateway_timeout_secs: u64,

    /// Fact-check search configuration
    #[serde(default)]
    pub factcheck: FactCheckConfig,
}

fn default_model() -> String {
    "HammerAI/mistral-nemo-uncensored:latest".into()
}
fn default_base_url() -> String {
    "http://localhost:11434".into()
}
fn default_max_words() -> usize {
    25
}
fn default_retries() -> u32 {
    2
}
fn default_max_input_chars() -> usize {
    1500
}
fn default_num_predict() -> u32 {
    200
}
fn default_gateway_timeout_secs() -> u64 {
    1800
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_words", &self.max_words)
            .field("retries", &self.retries)
            .field("sleep_secs", &self.sleep_secs)
            .field("max_input_chars", &self.max_input_chars)
            .field("temperature", &self.temperature)
            .field("num_predict", &self.num_predict)
            .field("gateway_timeout_secs", &self.gateway_timeout_secs)
            .field("factcheck", &self.factcheck)
            .finish()
    }
}

/// Settings for the Google Fact Check Tools search client.
#[derive(Clone, Serialize, Deserialize)]
pub struct FactCheckConfig {
    /// API key; usually supplied via environment instead of the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// BCP-47 language code for search results
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Number of results per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_language_code() -> String {
    "en-US".into()
}
fn default_page_size() -> u32 {
    5
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language_code: default_language_code(),
            page_size: default_page_size(),
        }
    }
}

impl std::fmt::Debug for FactCheckConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactCheckConfig")
            .field("api_key", &redact(&self.api_key))
            .field("language_code", &self.language_code)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.soapbox/config.toml).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_dir().join("config.toml"))
    }

    /// Load configuration from a specific file path.
    ///
    /// Order: file values (defaults when the file is missing), then
    /// environment overrides, then validation. The environment is consulted
    /// on this path too, so `--config` does not lose an exported API key:
    /// - `SOAPBOX_MODEL` overrides the model
    /// - `SOAPBOX_BASE_URL` overrides the gateway base URL
    /// - `SOAPBOX_FACTCHECK_API_KEY` or `GOOGLE_FACTCHECK_API_KEY` supply
    ///   the fact-check key when the file has none
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read the file as-is, without overrides or validation.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Apply environment overrides via a lookup function (the real
    /// environment in production, a closure in tests).
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(model) = env("SOAPBOX_MODEL") {
            self.model = model;
        }

        if let Some(base_url) = env("SOAPBOX_BASE_URL") {
            self.base_url = base_url;
        }

        if self.factcheck.api_key.is_none() {
            self.factcheck.api_key =
                env("SOAPBOX_FACTCHECK_API_KEY").or_else(|| env("GOOGLE_FACTCHECK_API_KEY"));
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".soapbox")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError("model must not be empty".into()));
        }

        if self.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "base_url must not be empty".into(),
            ));
        }

        if self.max_words == 0 {
            return Err(ConfigError::ValidationError(
                "max_words must be at least 1".into(),
            ));
        }

        if self.retries > 10 {
            return Err(ConfigError::ValidationError(
                "retries must be 10 or fewer".into(),
            ));
        }

        if self.temperature < 0.0 || self.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.factcheck.page_size == 0 || self.factcheck.page_size > 50 {
            return Err(ConfigError::ValidationError(
                "factcheck.page_size must be between 1 and 50".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            max_words: default_max_words(),
            retries: default_retries(),
            sleep_secs: 0.0,
            max_input_chars: default_max_input_chars(),
            temperature: 0.0,
            num_predict: default_num_predict(),
            gateway_timeout_secs: default_gateway_timeout_secs(),
            factcheck: FactCheckConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
