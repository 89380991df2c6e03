//! Configuration management for the CLI.
//!
//! Settings come from three layers, later layers winning: built-in
//! defaults, the TOML file at `~/.newslens/config.toml`, and environment
//! variables (the original deployment's names: `OPENAI_MODEL`,
//! `OPENAI_MAX_TOKENS`, `OPENAI_TEMPERATURE`, `REQUEST_TIMEOUT`,
//! `MAX_CONTENT_LENGTH`, `USER_AGENT`, `APP_NAME`). All of these are
//! cosmetic/tuning knobs; the API key never lives in this file.

use crate::error::{CliError, Result};
use newslens_extractor::ExtractorConfig;
use newslens_fetch::{FetchConfig, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output token budget for extraction calls
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature for extraction calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Page fetch timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Maximum characters of page text sent to the model
    #[serde(default = "default_max_content_length")]
    pub max_content_length: usize,

    /// User-Agent header for page fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Branding string shown in the interactive session
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Presentation settings
    #[serde(default)]
    pub settings: Settings,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".newslens").join("config.toml"))
    }

    /// Load configuration: file (when present) plus environment overrides,
    /// then validate the combined values.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::path()?)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("loading configuration from {}", path.display());
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str::<Config>(&contents)?)
        } else {
            debug!("no configuration file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Apply environment-variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = env::var("OPENAI_MODEL") {
            self.model = v;
        }
        if let Ok(v) = env::var("OPENAI_MAX_TOKENS") {
            self.max_output_tokens = parse_env("OPENAI_MAX_TOKENS", &v)?;
        }
        if let Ok(v) = env::var("OPENAI_TEMPERATURE") {
            self.temperature = parse_env("OPENAI_TEMPERATURE", &v)?;
        }
        if let Ok(v) = env::var("REQUEST_TIMEOUT") {
            self.request_timeout_secs = parse_env("REQUEST_TIMEOUT", &v)?;
        }
        if let Ok(v) = env::var("MAX_CONTENT_LENGTH") {
            self.max_content_length = parse_env("MAX_CONTENT_LENGTH", &v)?;
        }
        if let Ok(v) = env::var("USER_AGENT") {
            self.user_agent = v;
        }
        if let Ok(v) = env::var("APP_NAME") {
            self.app_name = v;
        }
        Ok(())
    }

    /// Check the loaded values before components are built from them.
    /// File and environment sources are both free-form, so the bounds the
    /// components assume are enforced here.
    pub fn validate(&self) -> Result<()> {
        self.extractor_config().validate().map_err(CliError::Config)?;

        if self.request_timeout_secs == 0 {
            return Err(CliError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.max_content_length == 0 {
            return Err(CliError::Config(
                "max_content_length must be greater than 0".to_string(),
            ));
        }
        // reqwest rejects header values outside visible ASCII at client
        // build time, which would panic instead of erroring
        if !self
            .user_agent
            .bytes()
            .all(|b| b == b'\t' || (0x20..=0x7e).contains(&b))
        {
            return Err(CliError::Config(
                "user_agent contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        Ok(())
    }

    /// Fetcher configuration derived from these settings.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_secs: self.request_timeout_secs,
            max_content_length: self.max_content_length,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Extractor configuration derived from these settings.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
            ..ExtractorConfig::default()
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: '{}'", name, value)))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout(),
            max_content_length: default_max_content_length(),
            user_agent: default_user_agent(),
            app_name: default_app_name(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_model() -> String {
    newslens_llm::openai::DEFAULT_MODEL.to_string()
}

fn default_max_output_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.3
}

fn default_request_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_content_length() -> usize {
    DEFAULT_MAX_CONTENT_LENGTH
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_app_name() -> String {
    "News Impact Analyzer".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}
