use axum::{
    extract::{Request, State},
    response::Response,
};

use super::dispatch;
use crate::api::router::AppState;

/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = crate::application::dto::HealthResponse)
    )
)]
pub async fn health_handler(state: State<AppState>, request: Request) -> Response {
    dispatch(state, request).await
}
