use axum::http::StatusCode;
use thiserror::Error;

use crate::api::request::ApiResponse;
use crate::application::dto::{ErrorResponse, FieldError};

/// Failures before the request reaches a use case
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,
}

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    details: Option<String>,
    field_errors: Option<Vec<FieldError>>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            field_errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn unprocessable(field_errors: Vec<FieldError>) -> Self {
        Self {
            field_errors: Some(field_errors),
            ..Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation failed")
        }
    }

    /// Attach the underlying error message for diagnostics
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render as a JSON response. `details` is dropped unless `expose_details`.
    pub fn into_api_response(self, expose_details: bool) -> ApiResponse {
        let body = ErrorResponse {
            success: false,
            error: self.message,
            details: self.details.filter(|_| expose_details),
            field_errors: self.field_errors,
        };

        ApiResponse::json(self.status, &body)
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::MalformedBody(msg) => {
                ApiError::internal_error("Internal server error").with_details(msg)
            }
            TransportError::PayloadTooLarge => {
                ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            TransportError::MethodNotAllowed => {
                ApiError::new(StatusCode::METHOD_NOT_ALLOWED, err.to_string())
            }
            TransportError::NotFound => ApiError::new(StatusCode::NOT_FOUND, err.to_string()),
        }
    }
}
