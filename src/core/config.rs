//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.askbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Nothing here logs: config is read before the logger exists, so problems
//! come back as values (`ConfigError`, `ResolvedConfig::warnings`) and the
//! binary reports them once logging is up.

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AskboxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub title: Option<String>,
    pub placeholder: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ask";
pub const DEFAULT_LOG_FILE: &str = "askbox.log";
pub const DEFAULT_TITLE: &str = "System Safety AI Assistant";
pub const DEFAULT_PLACEHOLDER: &str = "Type your question here...";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub title: String,
    pub placeholder: String,
    /// Non-fatal problems found while resolving, for the caller to log.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.askbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".askbox").join("config.toml"))
}

/// Load config from `~/.askbox/config.toml`.
///
/// A missing file (or no home directory) yields `AskboxConfig::default()`.
/// If the file exists but is malformed, returns `ConfigError::Parse`.
pub fn load_config() -> Result<AskboxConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(AskboxConfig::default()),
    }
}

/// Same as [`load_config`], for an explicit path.
pub fn load_config_from(path: &Path) -> Result<AskboxConfig, ConfigError> {
    if !path.exists() {
        return Ok(AskboxConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Writes the commented-out default config to `path` unless a file is
/// already there. Returns whether a file was written.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    let default_content = r#"# Askbox Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# endpoint = "http://localhost:8000/ask"   # Or ASKBOX_ENDPOINT / --endpoint
# log_level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
# log_file = "askbox.log"

# [ui]
# title = "System Safety AI Assistant"
# placeholder = "Type your question here..."
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    fs::write(path, default_content).map_err(ConfigError::Io)?;
    Ok(true)
}

// ============================================================================
// Resolution
// ============================================================================

/// Environment overrides, read once so resolution stays testable.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("ASKBOX_ENDPOINT").ok(),
            log_level: std::env::var("ASKBOX_LOG_LEVEL").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` is from the `--endpoint` flag (None = not specified).
pub fn resolve(
    config: &AskboxConfig,
    env: &EnvOverrides,
    cli_endpoint: Option<&str>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| env.endpoint.clone())
        .or_else(|| config.general.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let mut warnings = Vec::new();

    // Log level: env → config → default. Unknown names fall back to default.
    let log_level = env
        .log_level
        .as_deref()
        .or(config.general.log_level.as_deref())
        .and_then(|s| match s.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warnings.push(format!(
                    "Unknown log level {:?}, using {}",
                    s, DEFAULT_LOG_LEVEL
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        endpoint,
        log_level,
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        title: config
            .ui
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        placeholder: config
            .ui
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        warnings,
    }
}
