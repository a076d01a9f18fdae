//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.choices/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::state::DrawMode;
use crate::core::store;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChoicesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub draw_range: Option<DrawMode>,
    pub data_file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Choices";
pub const DEFAULT_SUBTITLE: &str = "Put your life in my hands";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub subtitle: String,
    pub draw_mode: DrawMode,
    pub data_file: PathBuf,
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

/// Returns the path to `~/.choices/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".choices").join("config.toml"))
}

/// Load config from `~/.choices/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChoicesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ChoicesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ChoicesConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ChoicesConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ChoicesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Choices Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# title = "Choices"
# subtitle = "Put your life in my hands"
# draw_range = "scaled"          # "scaled" (over option count) or "fixed" (3 slots)
# data_file = "/path/to/options.json"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_data_file` is the `--data-file` flag (None = not specified).
pub fn resolve(config: &ChoicesConfig, cli_data_file: Option<PathBuf>) -> ResolvedConfig {
    // Data file: CLI → env → config → default
    let data_file = cli_data_file
        .or_else(|| std::env::var_os("CHOICES_DATA_FILE").map(PathBuf::from))
        .or_else(|| config.general.data_file.clone())
        .or_else(store::default_data_path)
        .unwrap_or_else(|| PathBuf::from("options.json"));

    ResolvedConfig {
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        subtitle: config
            .general
            .subtitle
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
        draw_mode: config.general.draw_range.unwrap_or_default(),
        data_file,
    }
}
