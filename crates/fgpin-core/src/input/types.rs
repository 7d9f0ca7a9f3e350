use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which key events the keyboard intercept discards while the takeover runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressionMode {
    /// No intercept is installed.
    #[default]
    #[serde(rename = "off")]
    Off,
    /// Discard only keys that can switch focus: Windows, Tab, Escape, Alt, Control.
    #[serde(rename = "focus-keys")]
    FocusKeys,
    /// Discard every key event.
    #[serde(rename = "all", alias = "all-keys")]
    AllKeys,
}

impl SuppressionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuppressionMode::Off => "off",
            SuppressionMode::FocusKeys => "focus-keys",
            SuppressionMode::AllKeys => "all",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, SuppressionMode::Off)
    }
}

impl fmt::Display for SuppressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuppressionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "none" => Ok(SuppressionMode::Off),
            "focus-keys" | "focus" => Ok(SuppressionMode::FocusKeys),
            "all" | "all-keys" => Ok(SuppressionMode::AllKeys),
            other => Err(format!(
                "Invalid suppression mode '{}'. Expected one of: off, focus-keys, all",
                other
            )),
        }
    }
}

// Virtual-key codes of the focus-switching keys.
const VK_TAB: u32 = 0x09;
const VK_CONTROL: u32 = 0x11;
const VK_MENU: u32 = 0x12;
const VK_ESCAPE: u32 = 0x1B;
const VK_LWIN: u32 = 0x5B;
const VK_RWIN: u32 = 0x5C;
const VK_LCONTROL: u32 = 0xA2;
const VK_RCONTROL: u32 = 0xA3;
const VK_LMENU: u32 = 0xA4;
const VK_RMENU: u32 = 0xA5;

/// Decide whether a key event with virtual-key code `vk_code` is discarded.
///
/// Runs inside the low-level hook callback, so it must stay allocation-free
/// and non-blocking.
pub fn should_suppress(mode: SuppressionMode, vk_code: u32) -> bool {
    match mode {
        SuppressionMode::Off => false,
        SuppressionMode::AllKeys => true,
        SuppressionMode::FocusKeys => matches!(
            vk_code,
            VK_TAB
                | VK_CONTROL
                | VK_MENU
                | VK_ESCAPE
                | VK_LWIN
                | VK_RWIN
                | VK_LCONTROL
                | VK_RCONTROL
                | VK_LMENU
                | VK_RMENU
        ),
    }
}
