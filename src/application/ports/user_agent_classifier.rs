#[cfg(test)]
use mockall::automock;

use crate::domain::value_objects::DeviceInfo;

/// Port for user-agent classification
#[cfg_attr(test, automock)]
pub trait UserAgentClassifier: Send + Sync {
    fn classify(&self, user_agent: &str) -> DeviceInfo;
}
