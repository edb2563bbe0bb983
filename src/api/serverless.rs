//! Serverless function adapter
//!
//! Accepts proxy-style function events (`httpMethod`, `path`, `headers`,
//! `body`) and produces `{ statusCode, headers, body }` responses.

use axum::http::{HeaderMap, HeaderName, HeaderValue, Method};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;

use crate::api::errors::TransportError;
use crate::api::request::{ApiRequest, ApiResponse};
use crate::api::service::ContactApi;

/// Prefix under which function platforms mount individual functions
const FUNCTIONS_PREFIX: &str = "/.netlify/functions/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub identity: Option<Identity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub source_ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionEvent {
    /// Path as seen by the API, with the platform function prefix mapped to `/api/`
    pub fn api_path(&self) -> String {
        match self.path.strip_prefix(FUNCTIONS_PREFIX) {
            Some(function) => format!("/api/{}", function),
            None => self.path.clone(),
        }
    }

    pub fn into_api_request(self) -> Result<ApiRequest, TransportError> {
        let path = self.api_path();
        let method = Method::from_bytes(self.http_method.trim().to_uppercase().as_bytes())
            .map_err(|_| TransportError::MethodNotAllowed)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::debug!(header = %name, "Skipping invalid header"),
            }
        }

        let body = match self.body {
            Some(body) if self.is_base64_encoded => match STANDARD.decode(body.as_bytes()) {
                Ok(decoded) => Bytes::from(decoded),
                // Leave the body as-is; JSON parsing will reject it
                Err(e) => {
                    tracing::warn!(error = %e, "Body flagged as base64 but failed to decode");
                    Bytes::from(body)
                }
            },
            Some(body) => Bytes::from(body),
            None => Bytes::new(),
        };

        let peer_ip = self
            .request_context
            .and_then(|ctx| ctx.identity)
            .and_then(|identity| identity.source_ip)
            .and_then(|ip| ip.parse::<IpAddr>().ok());

        Ok(ApiRequest {
            method,
            path,
            headers,
            body,
            peer_ip,
        })
    }
}

impl From<ApiResponse> for FunctionResponse {
    fn from(response: ApiResponse) -> Self {
        let body = String::from_utf8(response.body_bytes()).unwrap_or_default();
        let mut headers: HashMap<String, String> = response
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        if response.body.is_some() {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }

        Self {
            status_code: response.status.as_u16(),
            headers,
            body,
        }
    }
}

/// Handle one function invocation
pub async fn handle_event(api: &ContactApi, event: FunctionEvent) -> FunctionResponse {
    let path = event.api_path();
    let response = match event.into_api_request() {
        Ok(request) => api.handle(request).await,
        Err(e) => api.error_response(&path, e.into()),
    };

    FunctionResponse::from(response)
}
