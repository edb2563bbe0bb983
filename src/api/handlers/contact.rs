use axum::{
    extract::{Request, State},
    response::Response,
};

use super::dispatch;
use crate::api::router::AppState;

/// POST /api/contact
/// Validate, enrich and store a contact submission
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = crate::application::dto::ContactSubmission,
    responses(
        (status = 201, description = "Contact stored", body = crate::application::dto::SubmitContactResponse),
        (status = 400, description = "Validation failed", body = crate::application::dto::ErrorResponse),
        (status = 405, description = "Method not allowed", body = crate::application::dto::ErrorResponse),
        (status = 500, description = "Malformed body or database failure", body = crate::application::dto::ErrorResponse)
    )
)]
pub async fn submit_contact_handler(state: State<AppState>, request: Request) -> Response {
    dispatch(state, request).await
}

/// POST /api/contact/validate
/// Form-level validation, one message per field; nothing is stored
#[utoipa::path(
    post,
    path = "/api/contact/validate",
    tag = "contact",
    request_body = crate::application::dto::ContactSubmission,
    responses(
        (status = 200, description = "Form is valid", body = crate::application::dto::ValidateContactResponse),
        (status = 422, description = "Per-field errors", body = crate::application::dto::ErrorResponse)
    )
)]
pub async fn validate_contact_handler(state: State<AppState>, request: Request) -> Response {
    dispatch(state, request).await
}
