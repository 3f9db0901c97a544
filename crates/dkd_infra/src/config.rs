//! Calculator configuration.
//!
//! Every key is optional. A missing key takes its default; a present but
//! invalid value fails closed with a `ConfigError` instead of being
//! silently replaced.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "DKD_RISK_CONFIG";

/// Default text shown for a tier with no probability.
pub const DEFAULT_ABSENT_PLACEHOLDER: &str = "—";

/// Report rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub output: OutputFormat,
    /// Shown in place of a percentage for tiers with missing fields.
    pub absent_placeholder: String,
    /// Age flag to use when the input leaves it unset (0 or 1).
    pub age_when_absent: Option<f64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Markdown,
            absent_placeholder: DEFAULT_ABSENT_PLACEHOLDER.to_string(),
            age_when_absent: None,
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.absent_placeholder.is_empty() {
            return Err(ConfigError::Invalid {
                key: "absent_placeholder",
                reason: "must not be empty",
            });
        }
        if let Some(age) = self.age_when_absent {
            if age != 0.0 && age != 1.0 {
                return Err(ConfigError::Invalid {
                    key: "age_when_absent",
                    reason: "must be 0 or 1",
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse { message: String },
    Invalid { key: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {message}", path.display())
            }
            ConfigError::Parse { message } => write!(f, "failed to parse config: {message}"),
            ConfigError::Invalid { key, reason } => {
                write!(f, "config fail-closed: '{key}' {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate a JSON config document.
pub fn parse_config(json: &str) -> Result<CalculatorConfig, ConfigError> {
    let config: CalculatorConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<CalculatorConfig, ConfigError> {
    let body = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_config(&body)
}

/// Pick the config source: explicit path, then `env_path`, then defaults.
pub fn resolve_config_from(
    explicit: Option<&Path>,
    env_path: Option<String>,
) -> Result<CalculatorConfig, ConfigError> {
    if let Some(path) = explicit {
        tracing::debug!("loading config from --config {}", path.display());
        return load_config(path);
    }
    match env_path.filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            tracing::debug!("loading config from {CONFIG_ENV_VAR}={path}");
            load_config(Path::new(&path))
        }
        None => Ok(CalculatorConfig::default()),
    }
}

/// [`resolve_config_from`] with the path taken from [`CONFIG_ENV_VAR`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<CalculatorConfig, ConfigError> {
    resolve_config_from(explicit, std::env::var(CONFIG_ENV_VAR).ok())
}
