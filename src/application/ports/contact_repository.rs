use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{ContactRecord, NewContact};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for contact persistence. The implementation is the only writer of
/// contact records; records are never updated or deleted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert one contact and return it as stored, with its generated id and timestamp
    async fn insert(&self, contact: &NewContact) -> Result<ContactRecord, PersistenceError>;

    /// All contacts, most recent first
    async fn list_all(&self) -> Result<Vec<ContactRecord>, PersistenceError>;
}
