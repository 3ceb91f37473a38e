//! Verb-specific HTTP operations with uniform outcome classification.
//!
//! Responsibilities:
//! - Execute one HTTP call per operation and parse the body as JSON
//!   regardless of status code.
//! - Log a structured warning on non-success statuses but still return the
//!   parsed body; callers decide whether the payload is usable.
//! - Return the raw body when it is not JSON so callers can inspect it
//!   (an HTML challenge page from an edge proxy, for example).
//! - Classify network-level failures (connect, DNS, timeout, TLS) into typed
//!   errors; nothing here terminates the process.
//!
//! Does NOT handle:
//! - Path construction per logical operation (see [`crate::endpoints`]).
//! - Authentication headers (callers pass a ready [`HeaderMap`]).
//!
//! Invariants:
//! - Every exit path is a returned value or a typed error; no panics.

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, multipart};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::error::{ClientError, Result};

/// Outcome of an API call that reached the server.
///
/// Callers expecting structured data must check for [`ApiResponse::Raw`]
/// before use and treat it as "operation effectively failed".
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// Body parsed as JSON (any status code).
    Json(Value),
    /// Body was not valid JSON; returned verbatim for inspection.
    Raw { status: u16, body: String },
}

impl ApiResponse {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw { .. } => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw { .. } => None,
        }
    }

    /// Deserialize the JSON body into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidResponse`] when the response was not
    /// JSON or does not match `T`.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        match self {
            Self::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| ClientError::InvalidResponse(e.to_string())),
            Self::Raw { status, .. } => Err(ClientError::InvalidResponse(format!(
                "expected JSON body, got non-JSON response with status {status}"
            ))),
        }
    }
}

/// GET request. Assumes no body.
pub async fn get(
    http: &Client,
    base_url: &str,
    root: &str,
    path: &str,
    name: &str,
    headers: &HeaderMap,
) -> Result<ApiResponse> {
    let builder = http
        .get(format!("{base_url}{root}{path}"))
        .headers(headers.clone());
    execute(builder, "GET", name, path).await
}

/// POST request with a JSON payload.
pub async fn post<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    root: &str,
    path: &str,
    name: &str,
    headers: &HeaderMap,
    payload: &T,
) -> Result<ApiResponse> {
    let builder = http
        .post(format!("{base_url}{root}{path}"))
        .headers(headers.clone())
        .json(payload);
    execute(builder, "POST", name, path).await
}

/// POST request with a multipart form-data body.
pub async fn post_multipart(
    http: &Client,
    base_url: &str,
    root: &str,
    path: &str,
    name: &str,
    headers: &HeaderMap,
    form: multipart::Form,
) -> Result<ApiResponse> {
    let builder = http
        .post(format!("{base_url}{root}{path}"))
        .headers(headers.clone())
        .multipart(form);
    execute(builder, "POST", name, path).await
}

/// PUT request with a JSON payload.
pub async fn put<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    root: &str,
    path: &str,
    name: &str,
    headers: &HeaderMap,
    payload: &T,
) -> Result<ApiResponse> {
    let builder = http
        .put(format!("{base_url}{root}{path}"))
        .headers(headers.clone())
        .json(payload);
    execute(builder, "PUT", name, path).await
}

/// DELETE request. Assumes no body.
pub async fn delete(
    http: &Client,
    base_url: &str,
    root: &str,
    path: &str,
    name: &str,
    headers: &HeaderMap,
) -> Result<ApiResponse> {
    let builder = http
        .delete(format!("{base_url}{root}{path}"))
        .headers(headers.clone());
    execute(builder, "DELETE", name, path).await
}

/// Send the request and classify the outcome.
async fn execute(builder: RequestBuilder, verb: &str, name: &str, path: &str) -> Result<ApiResponse> {
    let response = builder
        .send()
        .await
        .map_err(|e| classify_send_error(e, verb, name, path))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| classify_send_error(e, verb, name, path))?;

    match serde_json::from_str::<Value>(&body) {
        Ok(json) => {
            if !status.is_success() {
                let message = json
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                warn!(
                    operation = name,
                    status = status.as_u16(),
                    message,
                    "request returned a non-success status"
                );
            }
            Ok(ApiResponse::Json(json))
        }
        Err(e) => {
            error!(operation = name, error = %e, "malformed API response");
            Ok(ApiResponse::Raw {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Map a reqwest error to a typed client error, logging the context.
fn classify_send_error(e: reqwest::Error, verb: &str, name: &str, path: &str) -> ClientError {
    error!(
        operation = name,
        verb,
        path,
        error = %e,
        "could not complete request"
    );
    if e.is_timeout() {
        ClientError::Timeout {
            operation: name.to_string(),
        }
    } else if e.is_connect() {
        ClientError::ConnectionFailed {
            operation: name.to_string(),
            path: path.to_string(),
            message: e.to_string(),
        }
    } else {
        ClientError::HttpError(e)
    }
}
