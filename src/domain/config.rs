//! Studio configuration loaded from `deepads.toml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable holding the model API key.
pub const API_KEY_ENV: &str = "DEEPADS_API_KEY";

/// Name of the optional config file in the working directory.
pub const CONFIG_FILE: &str = "deepads.toml";

/// Top-level configuration. Every field has a default so the file is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudioConfig {
    /// Model API configuration.
    #[serde(default)]
    pub api: ModelApiConfig,
}

impl StudioConfig {
    /// Load configuration from `deepads.toml` in `dir`, or defaults when absent.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: StudioConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Text-generation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelApiConfig {
    /// Completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens requested per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts for retryable failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Optional path to a file holding the API key.
    #[serde(default)]
    pub key_file: Option<String>,
}

impl Default for ModelApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            key_file: None,
        }
    }
}

impl ModelApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("max_tokens must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("max_retries must be greater than 0"));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::config_error("retry_delay_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Resolve the API key: environment variable first, then `key_file`.
    pub fn resolve_api_key(&self) -> Result<String, AppError> {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            return Ok(key.trim().to_string());
        }

        if let Some(key_file) = &self.key_file {
            let content = fs::read_to_string(key_file).map_err(|e| {
                AppError::config_error(format!("Failed to read key file '{}': {}", key_file, e))
            })?;
            let key = content.trim();
            if key.is_empty() {
                return Err(AppError::config_error(format!("Key file '{}' is empty", key_file)));
            }
            return Ok(key.to_string());
        }

        Err(AppError::config_error(format!(
            "{} environment variable not set (or configure [api] key_file in {})",
            API_KEY_ENV, CONFIG_FILE
        )))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.deepads.io/v1/complete").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "alex-4".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}
