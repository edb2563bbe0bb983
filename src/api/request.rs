//! Transport-neutral request and response types
//!
//! Every adapter (the axum server, the serverless function) translates its
//! platform objects into these before calling [`super::service::ContactApi`].

use axum::{
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Serialize;
use std::net::IpAddr;

/// Normalized incoming request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// Address of the directly connected peer, when the platform knows it
    pub peer_ip: Option<IpAddr>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            peer_ip: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_peer_ip(mut self, peer_ip: IpAddr) -> Self {
        self.peer_ip = Some(peer_ip);
        self
    }
}

/// Normalized outgoing response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                headers: HeaderMap::new(),
                body: Some(value),
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    headers: HeaderMap::new(),
                    body: Some(serde_json::json!({
                        "success": false,
                        "error": "Internal server error",
                    })),
                }
            }
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Serialized body; empty when there is none
    pub fn body_bytes(&self) -> Vec<u8> {
        self.body
            .as_ref()
            .and_then(|value| serde_json::to_vec(value).ok())
            .unwrap_or_default()
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let body = self.body_bytes();
        let mut headers = self.headers;
        if self.body.is_some() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        (self.status, headers, body).into_response()
    }
}
