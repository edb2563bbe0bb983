use std::sync::Arc;

use crate::application::dto::{ContactRecordDto, ContactSubmission};
use crate::application::errors::ContactUseCaseError;
use crate::application::ports::{ContactRepository, UserAgentClassifier};
use crate::application::sanitizer::{sanitize, Enrichment};
use crate::domain::validation::ContactValidator;

/// Use case: accept a contact submission
pub struct SubmitContactUseCase {
    contact_repo: Arc<dyn ContactRepository>,
    classifier: Arc<dyn UserAgentClassifier>,
    validator: ContactValidator,
}

impl SubmitContactUseCase {
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        classifier: Arc<dyn UserAgentClassifier>,
        validator: ContactValidator,
    ) -> Self {
        Self {
            contact_repo,
            classifier,
            validator,
        }
    }

    /// Execute validate, enrich, sanitize, persist
    pub async fn execute(
        &self,
        submission: ContactSubmission,
        client_ip: String,
    ) -> Result<ContactRecordDto, ContactUseCaseError> {
        // 1. Validate (first failing rule only)
        if let Err(e) = self.validator.validate(&submission.fields()) {
            tracing::info!(rule = e.code(), "Contact submission rejected");
            return Err(e.into());
        }

        // 2. Enrich from the client-supplied user agent, not the transport header
        let device = submission
            .user_agent
            .as_deref()
            .filter(|ua| !ua.trim().is_empty())
            .map(|ua| self.classifier.classify(ua));

        let enrichment = Enrichment {
            ip_address: Some(client_ip),
            device,
        };

        // 3. Sanitize
        let contact = sanitize(&submission, enrichment);

        // 4. Persist
        let record = self.contact_repo.insert(&contact).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to store contact submission");
            e
        })?;

        tracing::info!(contact_id = record.id(), "Contact submission stored");

        Ok(ContactRecordDto::from(record))
    }
}
