//! REST API endpoint catalog.
//!
//! One function per logical operation, binding the operation name, API root,
//! and path template in a single static place and delegating to
//! [`crate::transport`]. Purely declarative; no behavior beyond path
//! construction.

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::Serialize;

use crate::error::Result;
use crate::transport::{self, ApiResponse};

const API_V1: &str = "/api/v1";
const API_V2: &str = "/api/v2";

/// Unauthenticated probe used to confirm a URL points at a live instance.
pub async fn root(http: &Client, base_url: &str, headers: &HeaderMap) -> Result<ApiResponse> {
    transport::get(http, base_url, API_V1, "/", "Root", headers).await
}

pub async fn authenticate<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    headers: &HeaderMap,
    payload: &T,
) -> Result<ApiResponse> {
    transport::post(http, base_url, API_V1, "/authenticate", "Authenticate", headers, payload).await
}

pub async fn mfa_authenticate<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    headers: &HeaderMap,
    payload: &T,
) -> Result<ApiResponse> {
    transport::post(
        http,
        base_url,
        API_V1,
        "/authenticate/mfa",
        "MFA Authenticate",
        headers,
        payload,
    )
    .await
}

// ---------- Client endpoints ----------

pub async fn list_clients(http: &Client, base_url: &str, headers: &HeaderMap) -> Result<ApiResponse> {
    transport::get(http, base_url, API_V1, "/client/list", "List Clients", headers).await
}

pub async fn get_client(
    http: &Client,
    base_url: &str,
    headers: &HeaderMap,
    client_id: u64,
) -> Result<ApiResponse> {
    transport::get(
        http,
        base_url,
        API_V1,
        &format!("/client/{client_id}"),
        "Get Client",
        headers,
    )
    .await
}

// ---------- Report endpoints ----------

pub async fn list_client_reports(
    http: &Client,
    base_url: &str,
    headers: &HeaderMap,
    client_id: u64,
) -> Result<ApiResponse> {
    transport::get(
        http,
        base_url,
        API_V1,
        &format!("/client/{client_id}/reports"),
        "List Client Reports",
        headers,
    )
    .await
}

pub async fn bulk_update_findings_status<T: Serialize + ?Sized>(
    http: &Client,
    base_url: &str,
    headers: &HeaderMap,
    client_id: u64,
    report_id: u64,
    payload: &T,
) -> Result<ApiResponse> {
    transport::put(
        http,
        base_url,
        API_V2,
        &format!("/clients/{client_id}/reports/{report_id}/findings"),
        "Bulk Update Findings Status",
        headers,
        payload,
    )
    .await
}

// ---------- Finding endpoints ----------

pub async fn list_report_findings(
    http: &Client,
    base_url: &str,
    headers: &HeaderMap,
    client_id: u64,
    report_id: u64,
) -> Result<ApiResponse> {
    transport::get(
        http,
        base_url,
        API_V1,
        &format!("/client/{client_id}/report/{report_id}/flaws"),
        "List Report Findings",
        headers,
    )
    .await
}
