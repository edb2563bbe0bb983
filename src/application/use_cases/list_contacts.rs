use std::sync::Arc;

use crate::application::dto::ContactRecordDto;
use crate::application::errors::ContactUseCaseError;
use crate::application::ports::ContactRepository;

/// Use case: list every stored contact, newest first
pub struct ListContactsUseCase {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ListContactsUseCase {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    pub async fn execute(&self) -> Result<Vec<ContactRecordDto>, ContactUseCaseError> {
        let records = self.contact_repo.list_all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list contacts");
            e
        })?;

        Ok(records.into_iter().map(ContactRecordDto::from).collect())
    }
}
