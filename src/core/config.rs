//! Configuration management for broeser
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/broeser/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{BroeserError, Result};
use crate::navigation::normalize;

/// Main configuration for broeser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Page loading configuration
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Alert texts
    #[serde(default)]
    pub alerts: AlertConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Page loading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Page loaded at startup
    pub home_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum redirects followed per load
    pub max_redirects: usize,
    /// Body bytes read before the page is marked truncated
    pub max_body_bytes: usize,
    /// Back/forward entries kept before the oldest are dropped
    pub max_history: usize,
}

/// Fixed texts of the blocking alerts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Alert title
    pub title: String,
    /// Shown when the address cannot be turned into a URL
    pub invalid_url_message: String,
    /// Shown when a page fails to load
    pub navigation_error_message: String,
    /// Label of the single acknowledgement button
    pub acknowledge_label: String,
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    pub filter: String,
    /// Log file name inside the state directory
    pub file_name: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: env::var("BROESER_HOME_URL")
                .unwrap_or_else(|_| "https://www.google.com".to_string()),
            user_agent: format!("broeser/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: env::var("BROESER_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            max_redirects: 10,
            max_body_bytes: 2 * 1024 * 1024,
            max_history: 1000,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            title: "Error".to_string(),
            invalid_url_message: "Invalid URL.".to_string(),
            navigation_error_message: "The page could not be loaded.".to_string(),
            acknowledge_label: "OK".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: env::var("BROESER_LOG").unwrap_or_else(|_| "warn,broeser=info".to_string()),
            file_name: "broeser.log".to_string(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("broeser")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the directory log files are written to
    pub fn state_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("broeser")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > config file > env vars > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(BroeserError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| BroeserError::config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that cannot be expressed in the types
    pub fn validate(&self) -> Result<()> {
        normalize(&self.browser.home_url)?;

        if self.browser.max_history == 0 {
            return Err(BroeserError::config("max_history must be at least 1"));
        }

        Ok(())
    }

    /// Parse configuration from TOML text; missing sections keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| BroeserError::config(format!("Failed to parse config: {}", e)))
    }

    /// Generate a default config file content for display
    pub fn default_config_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("# Error generating config"))
    }
}
