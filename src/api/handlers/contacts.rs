use axum::{
    extract::{Request, State},
    response::Response,
};

use super::dispatch;
use crate::api::router::AppState;

/// GET /api/contacts
/// All stored contacts, newest first
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contact",
    responses(
        (status = 200, description = "Contacts retrieved", body = crate::application::dto::ListContactsResponse),
        (status = 500, description = "Database failure", body = crate::application::dto::ErrorResponse)
    )
)]
pub async fn list_contacts_handler(state: State<AppState>, request: Request) -> Response {
    dispatch(state, request).await
}
