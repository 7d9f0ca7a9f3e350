//! Configuration type definitions for fgpin.
//!
//! Every file-level field is optional so that user, project and CLI layers
//! can be merged; [`FgpinConfig::policy`] resolves the unset ones to defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! max_attempts = 100
//! poll_interval_ms = 100
//!
//! [foreground]
//! bypass = true
//! bypass_attempts = 10
//! bypass_interval_ms = 300
//! extra_assurance_attempts = 0
//! maintain = true
//! maintain_interval_ms = 500
//!
//! [input]
//! suppression = "off"
//!
//! [process]
//! input_idle_timeout_ms = 10000
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::input::SuppressionMode;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FgpinConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub foreground: ForegroundConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub process: ProcessConfig,
}

/// Main-window polling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window enumerations before giving up. Default: 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    /// Delay between enumerations. Default: 100ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,
}

/// Foreground takeover and maintenance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForegroundConfig {
    /// Use the thread-input attachment workaround. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass: Option<bool>,

    /// Workaround attempts before giving up on confirmation. Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_attempts: Option<u32>,

    /// Delay between workaround attempts. Default: 300ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass_interval_ms: Option<u64>,

    /// Plain foreground requests issued after the takeover. Default: 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_assurance_attempts: Option<u32>,

    /// Keep re-asserting until the target exits. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain: Option<bool>,

    /// Delay between maintenance requests. Default: 500ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_interval_ms: Option<u64>,
}

/// Keyboard suppression during the takeover.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Default: off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppression: Option<SuppressionMode>,
}

/// Target process startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Upper bound on the input-idle wait after a launch. Default: 10000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_idle_timeout_ms: Option<u64>,
}

/// Fully resolved parameters for one pin run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinPolicy {
    pub window_max_attempts: u32,
    pub window_poll_interval: Duration,
    pub bypass: bool,
    pub bypass_attempts: u32,
    pub bypass_interval: Duration,
    pub extra_assurance_attempts: u32,
    pub maintain: bool,
    pub maintain_interval: Duration,
    pub suppression: SuppressionMode,
    pub input_idle_timeout: Duration,
}
