use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";
pub const DESKTOP: &str = "desktop";

/// Coarse client classification derived from a user-agent string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub browser: String,
    pub operating_system: String,
    pub device_type: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            browser: UNKNOWN.to_string(),
            operating_system: UNKNOWN.to_string(),
            device_type: DESKTOP.to_string(),
        }
    }
}
