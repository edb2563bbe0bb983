mod contact_repository;
mod user_agent_classifier;

pub use contact_repository::{ContactRepository, PersistenceError};
pub use user_agent_classifier::UserAgentClassifier;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use user_agent_classifier::MockUserAgentClassifier;
