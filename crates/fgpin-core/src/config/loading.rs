//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.fgpin/config.toml`
//! 3. **Project config** - `./.fgpin/config.toml`
//! 4. **CLI arguments** - merged by the caller with [`merge_configs`]

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::types::{
    FgpinConfig, ForegroundConfig, InputConfig, ProcessConfig, WindowConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".fgpin";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if the merged configuration fails validation. Missing files are not errors.
pub fn load_hierarchy() -> Result<FgpinConfig, Box<dyn std::error::Error>> {
    let mut config = FgpinConfig::default();

    if let Some(home_dir) = dirs::home_dir()
        && let Some(user_config) = load_optional(&home_dir.join(CONFIG_DIR).join(CONFIG_FILE))?
    {
        config = merge_configs(config, user_config);
    }

    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    if let Some(project_config) = load_optional(&project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a config file, treating a missing file as `None`.
fn load_optional(path: &Path) -> Result<Option<FgpinConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => {
            debug!(event = "core.config.file_loaded", path = %path.display());
            Ok(Some(config))
        }
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<FgpinConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// A field set in the override replaces the base value; unset fields keep it.
pub fn merge_configs(base: FgpinConfig, override_config: FgpinConfig) -> FgpinConfig {
    FgpinConfig {
        window: WindowConfig {
            max_attempts: override_config
                .window
                .max_attempts
                .or(base.window.max_attempts),
            poll_interval_ms: override_config
                .window
                .poll_interval_ms
                .or(base.window.poll_interval_ms),
        },
        foreground: ForegroundConfig {
            bypass: override_config.foreground.bypass.or(base.foreground.bypass),
            bypass_attempts: override_config
                .foreground
                .bypass_attempts
                .or(base.foreground.bypass_attempts),
            bypass_interval_ms: override_config
                .foreground
                .bypass_interval_ms
                .or(base.foreground.bypass_interval_ms),
            extra_assurance_attempts: override_config
                .foreground
                .extra_assurance_attempts
                .or(base.foreground.extra_assurance_attempts),
            maintain: override_config
                .foreground
                .maintain
                .or(base.foreground.maintain),
            maintain_interval_ms: override_config
                .foreground
                .maintain_interval_ms
                .or(base.foreground.maintain_interval_ms),
        },
        input: InputConfig {
            suppression: override_config
                .input
                .suppression
                .or(base.input.suppression),
        },
        process: ProcessConfig {
            input_idle_timeout_ms: override_config
                .process
                .input_idle_timeout_ms
                .or(base.process.input_idle_timeout_ms),
        },
    }
}
