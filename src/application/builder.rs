use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::api::service::ContactApi;
use crate::application::{
    ports::{ContactRepository, UserAgentClassifier},
    use_cases::{ListContactsUseCase, SubmitContactUseCase},
};
use crate::config::Config;
use crate::domain::validation::ContactValidator;
use crate::infrastructure::{classification::WootheeClassifier, persistence::PostgresContactRepository};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    classifier: Option<Arc<dyn UserAgentClassifier>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            contact_repo: None,
            classifier: None,
        }
    }

    /// Connect the database pool and run migrations when enabled.
    ///
    /// A failed connection is returned immediately, there is no retry.
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        let pool = PgPoolOptions::new()
            .max_connections(self.config.db_max_connections)
            .min_connections(self.config.db_min_connections)
            .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
            .connect(&self.config.database_url)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to database: {}", e);
                e
            })?;

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs
        );

        if self.config.run_migrations {
            info!("Running database migrations");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to run migrations: {}", e);
                    e
                })?;
        }

        self.contact_repo = Some(Arc::new(PostgresContactRepository::new(pool.clone())));
        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an existing repository instead of connecting to PostgreSQL
    pub fn with_repository(mut self, contact_repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(contact_repo);
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn UserAgentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Build the transport-agnostic API with all use cases
    pub fn build_api(&self) -> Result<ContactApi, Box<dyn std::error::Error>> {
        let contact_repo = self
            .contact_repo
            .clone()
            .ok_or("Contact repository not initialized")?;
        let classifier = self
            .classifier
            .clone()
            .unwrap_or_else(|| Arc::new(WootheeClassifier::new()));

        let settings = self.config.api_settings();
        let submit_use_case = Arc::new(SubmitContactUseCase::new(
            Arc::clone(&contact_repo),
            classifier,
            ContactValidator::new(settings.validation_policy),
        ));
        let list_use_case = Arc::new(ListContactsUseCase::new(contact_repo));

        info!(
            require_salutation = settings.validation_policy.require_salutation,
            expose_error_details = settings.expose_error_details,
            "Application layer initialized"
        );

        Ok(ContactApi::new(submit_use_case, list_use_case, settings))
    }

    /// Build application state for the HTTP server
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let contact_api = self.build_api()?;
        Ok(AppState {
            contact_api: Arc::new(contact_api),
            max_body_bytes: self.config.max_body_bytes,
        })
    }

    /// Database pool, when connected
    pub fn pool(&self) -> Option<&sqlx::PgPool> {
        self.pool.as_ref()
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
