//! # Configuration System
//!
//! Hierarchical TOML configuration for fgpin.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.fgpin/config.toml` (global user preferences)
//! 3. **Project config** - `./.fgpin/config.toml` (per-directory overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.fgpin/config.toml
//! [window]
//! max_attempts = 50
//!
//! [foreground]
//! bypass = true
//! maintain_interval_ms = 250
//!
//! [input]
//! suppression = "focus-keys"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use fgpin_core::config::FgpinConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FgpinConfig::load_hierarchy()?;
//!     let policy = config.policy();
//!     println!("{} window attempts", policy.window_max_attempts);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{
    FgpinConfig, ForegroundConfig, InputConfig, PinPolicy, ProcessConfig, WindowConfig,
};
pub use validation::{MAX_WINDOW_ATTEMPTS, validate_config};

impl FgpinConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Layer `overrides` on top of this configuration.
    pub fn merged_with(self, overrides: FgpinConfig) -> Self {
        loading::merge_configs(self, overrides)
    }
}
