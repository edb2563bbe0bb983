use axum::{routing::any, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    dispatch, health_handler, list_contacts_handler, submit_contact_handler,
    validate_contact_handler,
};
use crate::api::openapi::swagger_ui;
use crate::api::service::ContactApi;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub contact_api: Arc<ContactApi>,
    pub max_body_bytes: usize,
}

/// Create router with all routes and middleware
///
/// Every route accepts any method: method checks, preflight handling and
/// CORS headers belong to [`ContactApi`] so that all adapters behave alike.
/// The body size limit is enforced in [`dispatch`], so a 413 also goes
/// through [`ContactApi::error_response`].
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", any(submit_contact_handler))
        .route("/api/contact/validate", any(validate_contact_handler))
        .route("/api/contacts", any(list_contacts_handler))
        .route("/api/health", any(health_handler))
        .fallback(dispatch)
        .with_state(state)
        .merge(swagger_ui())
        .layer(TraceLayer::new_for_http())
}
