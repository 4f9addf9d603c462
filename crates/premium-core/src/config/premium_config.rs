//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ClientConfig, DisplayConfig, DisplayMode};
use crate::errors::ConfigError;

pub const ENV_BASE_URL: &str = "PREMIUM_BASE_URL";
pub const ENV_PATH: &str = "PREMIUM_PATH";
pub const ENV_TIMEOUT_MS: &str = "PREMIUM_TIMEOUT_MS";
pub const ENV_DISPLAY_MODE: &str = "PREMIUM_DISPLAY_MODE";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PREMIUM_*`)
/// 3. Project config (`premium.toml` in the working directory)
/// 4. User config (`~/.premium/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PremiumConfig {
    pub client: ClientConfig,
    pub display: DisplayConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub path: Option<String>,
    pub timeout_ms: Option<u64>,
    pub display_mode: Option<DisplayMode>,
}

impl PremiumConfig {
    /// Load configuration, layering user, project, env, and CLI sources
    /// over the compiled defaults, then validate the result.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(
            endpoint = %config.client.endpoint(),
            timeout_ms = ?config.client.timeout_ms,
            display_mode = %config.display.effective_mode(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PremiumConfig) -> Result<(), ConfigError> {
        let base_url = config.client.effective_base_url();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "client.base_url".to_string(),
                message: format!("must start with http:// or https:// (got {base_url:?})"),
            });
        }
        for (field, value) in [
            ("client.base_url", base_url),
            ("client.path", config.client.effective_path()),
        ] {
            if value.contains('?') {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not carry a query string".to_string(),
                });
            }
        }
        if config.client.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "client.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.premium/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| {
            h.join(defaults::USER_CONFIG_DIRNAME)
                .join(defaults::USER_CONFIG_FILENAME)
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut PremiumConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PremiumConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut PremiumConfig, other: &PremiumConfig) {
        if other.client.base_url.is_some() {
            base.client.base_url = other.client.base_url.clone();
        }
        if other.client.path.is_some() {
            base.client.path = other.client.path.clone();
        }
        if other.client.timeout_ms.is_some() {
            base.client.timeout_ms = other.client.timeout_ms;
        }
        if other.display.mode.is_some() {
            base.display.mode = other.display.mode;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut PremiumConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_BASE_URL) {
            config.client.base_url = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_PATH) {
            config.client.path = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_TIMEOUT_MS) {
            let ms = val.parse::<u64>().map_err(|_| ConfigError::ValidationFailed {
                field: ENV_TIMEOUT_MS.to_string(),
                message: format!("not a whole number of milliseconds: {val:?}"),
            })?;
            config.client.timeout_ms = Some(ms);
        }
        if let Ok(val) = std::env::var(ENV_DISPLAY_MODE) {
            let mode = val
                .parse::<DisplayMode>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: ENV_DISPLAY_MODE.to_string(),
                    message,
                })?;
            config.display.mode = Some(mode);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PremiumConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.base_url {
            config.client.base_url = Some(v.clone());
        }
        if let Some(ref v) = cli.path {
            config.client.path = Some(v.clone());
        }
        if let Some(v) = cli.timeout_ms {
            config.client.timeout_ms = Some(v);
        }
        if let Some(v) = cli.display_mode {
            config.display.mode = Some(v);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
