//! Transport-agnostic contact API
//!
//! `ContactApi::handle` is the one implementation of the HTTP contract;
//! adapters only translate platform request/response objects.

use axum::http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::client_ip::extract_client_ip;
use crate::api::cors::cors_headers;
use crate::api::errors::{ApiError, TransportError};
use crate::api::request::{ApiRequest, ApiResponse};
use crate::api::validation::collect_field_errors;
use crate::application::dto::{
    ContactSubmission, HealthResponse, ListContactsResponse, SubmitContactResponse,
    ValidateContactResponse,
};
use crate::application::errors::ContactUseCaseError;
use crate::application::use_cases::{ListContactsUseCase, SubmitContactUseCase};
use crate::domain::validation::ValidationPolicy;

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for reaching out! Your message has been received and I will get back to you soon.";

/// Routable endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Contact,
    ValidateContact,
    Contacts,
    Health,
    Unknown,
}

impl Endpoint {
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/api/contact" => Self::Contact,
            "/api/contact/validate" => Self::ValidateContact,
            "/api/contacts" => Self::Contacts,
            "/api/health" => Self::Health,
            _ => Self::Unknown,
        }
    }

    /// Methods served, excluding the implicit `OPTIONS`
    pub fn allowed_methods(self) -> &'static [&'static str] {
        match self {
            Self::Contact | Self::ValidateContact => &["POST"],
            Self::Contacts | Self::Health => &["GET"],
            Self::Unknown => &["GET", "POST"],
        }
    }

    fn allows(self, method: &Method) -> bool {
        self.allowed_methods().contains(&method.as_str())
    }
}

/// Response-shaping settings
#[derive(Debug, Clone, Copy)]
pub struct ApiSettings {
    /// Include raw driver messages in 500 bodies
    pub expose_error_details: bool,
    pub validation_policy: ValidationPolicy,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            expose_error_details: true,
            validation_policy: ValidationPolicy::default(),
        }
    }
}

pub struct ContactApi {
    submit_use_case: Arc<SubmitContactUseCase>,
    list_use_case: Arc<ListContactsUseCase>,
    settings: ApiSettings,
}

impl ContactApi {
    pub fn new(
        submit_use_case: Arc<SubmitContactUseCase>,
        list_use_case: Arc<ListContactsUseCase>,
        settings: ApiSettings,
    ) -> Self {
        Self {
            submit_use_case,
            list_use_case,
            settings,
        }
    }

    /// Handle one request. Every response carries the endpoint's CORS headers.
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let span = tracing::info_span!(
            "request",
            request_id = %Uuid::new_v4(),
            method = %request.method,
            path = %request.path,
        );

        async move {
            let endpoint = Endpoint::from_path(&request.path);

            let response = if request.method == Method::OPTIONS && endpoint != Endpoint::Unknown {
                ApiResponse::empty(StatusCode::NO_CONTENT)
            } else {
                match self.dispatch(endpoint, request).await {
                    Ok(response) => response,
                    Err(e) => e.into_api_response(self.settings.expose_error_details),
                }
            };

            tracing::debug!(status = response.status.as_u16(), "Request handled");
            response.with_headers(cors_headers(endpoint.allowed_methods()))
        }
        .instrument(span)
        .await
    }

    /// Render an error raised by an adapter before `handle` could run
    pub fn error_response(&self, path: &str, error: ApiError) -> ApiResponse {
        let endpoint = Endpoint::from_path(path);
        error
            .into_api_response(self.settings.expose_error_details)
            .with_headers(cors_headers(endpoint.allowed_methods()))
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        request: ApiRequest,
    ) -> Result<ApiResponse, ApiError> {
        if endpoint == Endpoint::Unknown {
            return Err(TransportError::NotFound.into());
        }
        if !endpoint.allows(&request.method) {
            return Err(TransportError::MethodNotAllowed.into());
        }

        match endpoint {
            Endpoint::Contact => self.submit(request).await,
            Endpoint::ValidateContact => self.validate_form(request),
            Endpoint::Contacts => self.list().await,
            Endpoint::Health => Ok(health()),
            Endpoint::Unknown => Err(TransportError::NotFound.into()),
        }
    }

    async fn submit(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let submission: ContactSubmission = parse_body(&request)?;
        let client_ip = extract_client_ip(&request.headers, request.peer_ip);

        match self.submit_use_case.execute(submission, client_ip).await {
            Ok(record) => Ok(ApiResponse::json(
                StatusCode::CREATED,
                &SubmitContactResponse {
                    success: true,
                    message: CONFIRMATION_MESSAGE.to_string(),
                    data: record,
                },
            )),
            Err(ContactUseCaseError::Validation(e)) => Err(ApiError::bad_request(e.to_string())),
            Err(ContactUseCaseError::Persistence(e)) => {
                Err(ApiError::internal_error("Failed to submit contact form")
                    .with_details(e.to_string()))
            }
        }
    }

    fn validate_form(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let submission: ContactSubmission = parse_body(&request)?;
        let field_errors = collect_field_errors(&submission, self.settings.validation_policy);

        if !field_errors.is_empty() {
            return Err(ApiError::unprocessable(field_errors));
        }

        Ok(ApiResponse::json(
            StatusCode::OK,
            &ValidateContactResponse {
                success: true,
                valid: true,
            },
        ))
    }

    async fn list(&self) -> Result<ApiResponse, ApiError> {
        let contacts = self
            .list_use_case
            .execute()
            .await
            .map_err(|e| ApiError::internal_error("Failed to fetch contacts").with_details(e.to_string()))?;

        Ok(ApiResponse::json(
            StatusCode::OK,
            &ListContactsResponse {
                success: true,
                count: contacts.len(),
                data: contacts,
            },
        ))
    }
}

fn health() -> ApiResponse {
    ApiResponse::json(
        StatusCode::OK,
        &HealthResponse {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
        },
    )
}

/// Parse a JSON body; an empty body is treated as `{}`
fn parse_body<T: DeserializeOwned + Default>(request: &ApiRequest) -> Result<T, TransportError> {
    if request.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&request.body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected malformed request body");
        TransportError::MalformedBody(e.to_string())
    })
}
