use woothee::parser::Parser;

use crate::application::ports::UserAgentClassifier;
use crate::domain::value_objects::{device_info, DeviceInfo};

const PARSER_UNKNOWN: &str = "UNKNOWN";

/// User-agent classifier backed by the `woothee` parser
pub struct WootheeClassifier {
    parser: Parser,
}

impl WootheeClassifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }
}

impl Default for WootheeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentClassifier for WootheeClassifier {
    fn classify(&self, user_agent: &str) -> DeviceInfo {
        let Some(result) = self.parser.parse(user_agent) else {
            return DeviceInfo::default();
        };

        let os_version = result.os_version.to_string();

        DeviceInfo {
            browser: label(result.name, result.version),
            operating_system: label(result.os, &os_version),
            device_type: device_type(result.category, result.os, user_agent).to_string(),
        }
    }
}

/// `"<name> <version>"`, or `"Unknown"` without a name
fn label(name: &str, version: &str) -> String {
    if name.is_empty() || name == PARSER_UNKNOWN {
        return device_info::UNKNOWN.to_string();
    }

    if version.is_empty() || version == PARSER_UNKNOWN {
        return name.trim().to_string();
    }

    format!("{} {}", name, version).trim().to_string()
}

fn device_type(category: &str, os: &str, user_agent: &str) -> &'static str {
    match category {
        "smartphone" if os == "iPad" => "tablet",
        "smartphone" if os == "Android" && !user_agent.contains("Mobile") => "tablet",
        "smartphone" | "mobilephone" => "mobile",
        "appliance" => "console",
        "crawler" => "bot",
        _ => device_info::DESKTOP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";
    const SAFARI_IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";

    #[test]
    fn test_desktop_chrome() {
        let info = WootheeClassifier::new().classify(CHROME_WINDOWS);

        assert!(info.browser.starts_with("Chrome 120"));
        assert!(info.operating_system.starts_with("Windows"));
        assert_eq!(info.device_type, "desktop");
    }

    #[test]
    fn test_iphone_is_mobile() {
        let info = WootheeClassifier::new().classify(SAFARI_IPHONE);

        assert!(info.browser.starts_with("Safari"));
        assert!(info.operating_system.starts_with("iPhone"));
        assert_eq!(info.device_type, "mobile");
    }

    #[test]
    fn test_ipad_is_tablet() {
        let info = WootheeClassifier::new().classify(SAFARI_IPAD);
        assert_eq!(info.device_type, "tablet");
    }

    #[test]
    fn test_unparseable_agent_falls_back() {
        let info = WootheeClassifier::new().classify("");

        assert_eq!(info.browser, "Unknown");
        assert_eq!(info.operating_system, "Unknown");
        assert_eq!(info.device_type, "desktop");
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(label("Firefox", "121.0"), "Firefox 121.0");
        assert_eq!(label("Linux", "UNKNOWN"), "Linux");
        assert_eq!(label("UNKNOWN", "1.0"), "Unknown");
        assert_eq!(label("", ""), "Unknown");
    }

    #[test]
    fn test_device_type_mapping() {
        assert_eq!(device_type("pc", "Windows 10", ""), "desktop");
        assert_eq!(device_type("smartphone", "Android", "Android 14; Mobile"), "mobile");
        assert_eq!(device_type("smartphone", "Android", "Android 14; SM-X710"), "tablet");
        assert_eq!(device_type("mobilephone", "docomo", ""), "mobile");
        assert_eq!(device_type("crawler", "UNKNOWN", ""), "bot");
        assert_eq!(device_type("UNKNOWN", "UNKNOWN", ""), "desktop");
    }
}
