//! Error type shared by the contact use cases

use thiserror::Error;

use crate::application::ports::PersistenceError;
use crate::domain::errors::ValidationError;

#[derive(Debug, Error)]
pub enum ContactUseCaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}
