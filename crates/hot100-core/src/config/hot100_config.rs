//! Top-level hot100 configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnagramConfig, TwoSumConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::types::{AnagramStrategy, TwoSumStrategy};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HOT100_*`)
/// 3. Project config (`hot100.toml` in project root)
/// 4. User config (`~/.hot100/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Hot100Config {
    pub anagram: AnagramConfig,
    pub two_sum: TwoSumConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub anagram_strategy: Option<AnagramStrategy>,
    pub two_sum_strategy: Option<TwoSumStrategy>,
}

impl Hot100Config {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "Ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        ::tracing::debug!(
            anagram_strategy = %config.anagram.effective_strategy(),
            two_sum_strategy = %config.two_sum.effective_strategy(),
            "Configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.hot100/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut Hot100Config, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: Hot100Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut Hot100Config, other: &Hot100Config) {
        if other.anagram.strategy.is_some() {
            base.anagram.strategy = other.anagram.strategy;
        }
        if other.two_sum.strategy.is_some() {
            base.two_sum.strategy = other.two_sum.strategy;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HOT100_ANAGRAM_STRATEGY`, `HOT100_TWO_SUM_STRATEGY`.
    fn apply_env_overrides(config: &mut Hot100Config) {
        if let Ok(val) = std::env::var("HOT100_ANAGRAM_STRATEGY") {
            match val.parse::<AnagramStrategy>() {
                Ok(v) => config.anagram.strategy = Some(v),
                Err(e) => ::tracing::warn!(error = %e, "Ignoring HOT100_ANAGRAM_STRATEGY"),
            }
        }
        if let Ok(val) = std::env::var("HOT100_TWO_SUM_STRATEGY") {
            match val.parse::<TwoSumStrategy>() {
                Ok(v) => config.two_sum.strategy = Some(v),
                Err(e) => ::tracing::warn!(error = %e, "Ignoring HOT100_TWO_SUM_STRATEGY"),
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut Hot100Config, cli: &CliOverrides) {
        if let Some(v) = cli.anagram_strategy {
            config.anagram.strategy = Some(v);
        }
        if let Some(v) = cli.two_sum_strategy {
            config.two_sum.strategy = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
