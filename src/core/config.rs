//! # Configuration
//!
//! Settings come from four layers, later ones winning:
//! built-in defaults, `~/.railshub/config.toml`, environment variables
//! (including a `.env` file), then command-line flags.
//!
//! The first run writes a fully commented config file as a template.
//!
//! The Gemini API key is the one required setting. Without it the app
//! refuses to start.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::inference::providers::gemini::{DEFAULT_BASE_URL, DEFAULT_FRAMEWORK, DEFAULT_MODEL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HubConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_query: Option<String>,
    pub suggestions: Option<Vec<String>>,
    pub framework: Option<String>,
    pub discard_stale_responses: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_QUERY: &str = "What are the expected features in Rails 8?";

pub const DEFAULT_SUGGESTIONS: [&str; 4] = [
    "Rails 8 release date",
    "New features in Rails 8",
    "Rails 8 performance improvements",
    "Upgrading to Rails 8",
];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub base_url: String,
    pub model_name: String,
    pub framework: String,
    pub default_query: String,
    pub suggestions: Vec<String>,
    pub discard_stale_responses: bool,
}

/// Flags from the command line. `None` means not specified.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub model: Option<&'a str>,
    pub query: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(
        "Gemini API key not set (GEMINI_API_KEY or API_KEY env var, or [gemini] api_key in the config file)"
    )]
    MissingApiKey,
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.railshub/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".railshub").join("config.toml"))
}

/// Load config from `~/.railshub/config.toml`.
///
/// Writes the commented template first when no file exists, then
/// returns `HubConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HubConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HubConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HubConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: HubConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    // Not `{:?}` on the whole struct: it carries the API key.
    debug!(
        "Config: model={:?}, base_url={:?}, api_key_set={}",
        config.gemini.model,
        config.gemini.base_url,
        config.gemini.api_key.is_some()
    );
    Ok(config)
}

/// Writes the template config. Failure is logged, not fatal.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Rails Hub Configuration
# All settings are optional except the API key, which may also come from the
# GEMINI_API_KEY (or API_KEY) environment variable.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_query = "What are the expected features in Rails 8?"
# suggestions = [
#   "Rails 8 release date",
#   "New features in Rails 8",
#   "Rails 8 performance improvements",
#   "Upgrading to Rails 8",
# ]
# framework = "Ruby on Rails"          # Named in the prompt sent to the model
# discard_stale_responses = false      # true: ignore answers to superseded queries

# [gemini]
# api_key = "AIza..."                  # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# model = "gemini-2.5-flash"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Flattens the layers into concrete values, reading the process environment.
pub fn resolve(config: &HubConfig, cli: &CliOverrides<'_>) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], with environment lookup injected.
pub fn resolve_with_env(
    config: &HubConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // API key: env → config. Blank values count as missing.
    let api_key = env("GEMINI_API_KEY")
        .or_else(|| env("API_KEY"))
        .or_else(|| config.gemini.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    // Base URL: env → config → default
    let base_url = env("GEMINI_BASE_URL")
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Model: CLI → env → config → default
    let model_name = cli
        .model
        .map(str::to_string)
        .or_else(|| env("GEMINI_MODEL"))
        .or_else(|| config.gemini.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Initial query: CLI → config → default
    let default_query = cli
        .query
        .map(str::to_string)
        .or_else(|| config.general.default_query.clone())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    let suggestions = config
        .general
        .suggestions
        .clone()
        .unwrap_or_else(|| DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect());

    Ok(ResolvedConfig {
        api_key,
        base_url,
        model_name,
        framework: config
            .general
            .framework
            .clone()
            .unwrap_or_else(|| DEFAULT_FRAMEWORK.to_string()),
        default_query,
        suggestions,
        discard_stale_responses: config.general.discard_stale_responses.unwrap_or(false),
    })
}
