//! Axum adapter: converts axum requests into [`ApiRequest`] and back

pub mod contact;
pub mod contacts;
pub mod health;


use axum::{
    extract::{ConnectInfo, Request, State},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::api::errors::TransportError;
use crate::api::request::ApiRequest;
use crate::api::router::AppState;

pub use contact::{submit_contact_handler, validate_contact_handler};
pub use contacts::list_contacts_handler;
pub use health::health_handler;

/// Forward any request to the contact API
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let peer_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let (parts, body) = request.into_parts();
    let path = parts.uri.path().to_string();

    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read request body");
            return state
                .contact_api
                .error_response(&path, TransportError::PayloadTooLarge.into())
                .into_response();
        }
    };

    let api_request = ApiRequest {
        method: parts.method,
        path,
        headers: parts.headers,
        body,
        peer_ip,
    };

    state.contact_api.handle(api_request).await.into_response()
}
