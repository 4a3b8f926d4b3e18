use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::window::DEFAULT_HORIZON_DAYS;

const CONFIG_DIR_NAME: &str = "seasonal-hooks";
const CONFIG_FILE_NAME: &str = "config.toml";
const CURRENT_SCHEMA_VERSION: u32 = 1;
/// Annual events all fall within a year, so longer horizons add nothing.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Result returned by [`load_config`], capturing the source and any non-fatal issues.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: FileConfig,
    pub warnings: Vec<String>,
    pub source: ConfigSource,
}

/// Indicates where the configuration was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No persisted configuration was found or usable; defaults were synthesized.
    Default,
    /// Configuration was read from `config.toml`.
    File,
}

/// Errors that can occur when persisting configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Ser(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {err}"),
            ConfigError::Ser(err) => write!(f, "TOML serialization error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Ser(value)
    }
}

/// How reports are rendered by command-line callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Disk-backed configuration schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "FileConfig::schema_version")]
    pub schema_version: u32,
    #[serde(default = "FileConfig::default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default = "FileConfig::default_pretty")]
    pub pretty: bool,
    #[serde(default)]
    pub log_to_file: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            horizon_days: DEFAULT_HORIZON_DAYS,
            output: OutputFormat::default(),
            pretty: true,
            log_to_file: false,
        }
    }
}

impl FileConfig {
    const fn schema_version() -> u32 {
        CURRENT_SCHEMA_VERSION
    }

    const fn default_horizon_days() -> u32 {
        DEFAULT_HORIZON_DAYS
    }

    const fn default_pretty() -> bool {
        true
    }
}

/// Per-invocation overrides layered on top of the persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOverrides {
    pub horizon_days: Option<u32>,
    pub output: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub log_to_file: Option<bool>,
}

impl RuntimeOverrides {
    pub fn is_empty(&self) -> bool {
        self.horizon_days.is_none()
            && self.output.is_none()
            && self.pretty.is_none()
            && self.log_to_file.is_none()
    }
}

/// Apply CLI overrides, clamping out-of-range values with a warning.
pub fn apply_runtime_overrides(
    config: &mut FileConfig,
    overrides: &RuntimeOverrides,
    warnings: &mut Vec<String>,
) {
    if let Some(horizon) = overrides.horizon_days {
        config.horizon_days = clamp_horizon(horizon, warnings);
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    if let Some(pretty) = overrides.pretty {
        config.pretty = pretty;
    }
    if let Some(log_to_file) = overrides.log_to_file {
        config.log_to_file = log_to_file;
    }
}

/// Directory containing `config.toml` and the `logs/` folder.
pub fn config_directory() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to `config.toml`.
pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Load the configuration from the default location, falling back to defaults.
pub fn load_config() -> ConfigLoadResult {
    load_config_from(&config_path())
}

/// Load the configuration from `path`. Never fails; problems become warnings.
pub fn load_config_from(path: &Path) -> ConfigLoadResult {
    let mut warnings = Vec::new();

    if !path.exists() {
        return ConfigLoadResult {
            config: FileConfig::default(),
            warnings,
            source: ConfigSource::Default,
        };
    }

    match fs::read_to_string(path) {
        Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
            Ok(cfg) => {
                let (cfg, mut sanitize_warnings) = sanitize_config(cfg);
                warnings.append(&mut sanitize_warnings);
                return ConfigLoadResult {
                    config: cfg,
                    warnings,
                    source: ConfigSource::File,
                };
            }
            Err(err) => {
                warnings.push(format!(
                    "Failed to parse {} as TOML: {}. Falling back to defaults.",
                    CONFIG_FILE_NAME, err
                ));
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read {}: {}. Falling back to defaults.",
                CONFIG_FILE_NAME, err
            ));
        }
    }

    ConfigLoadResult {
        config: FileConfig::default(),
        warnings,
        source: ConfigSource::Default,
    }
}

/// Persist the configuration to the default location.
pub fn save_config(config: &FileConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn sanitize_config(mut config: FileConfig) -> (FileConfig, Vec<String>) {
    let mut warnings = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        warnings.push(format!(
            "Unknown config schema version {}. Resetting to {}.",
            config.schema_version, CURRENT_SCHEMA_VERSION
        ));
        return (FileConfig::default(), warnings);
    }

    config.horizon_days = clamp_horizon(config.horizon_days, &mut warnings);
    (config, warnings)
}

fn clamp_horizon(horizon_days: u32, warnings: &mut Vec<String>) -> u32 {
    if horizon_days > MAX_HORIZON_DAYS {
        warnings.push(format!(
            "Horizon of {} days exceeds {}; clamping.",
            horizon_days, MAX_HORIZON_DAYS
        ));
        MAX_HORIZON_DAYS
    } else {
        horizon_days
    }
}
