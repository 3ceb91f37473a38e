//! Shared helpers for the wiremock-backed integration tests.

#![allow(dead_code)]

use plextrac_client::PlextracClient;
use plextrac_config::{AuthConfig, Config, ConnectionConfig, WorkflowConfig};
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Body the unauthenticated root probe must answer with.
pub const SENTINEL: &str = "Authenticate at /authenticate";

/// Client with only the instance URL configured; everything else gets
/// collected through prompts.
pub fn bare_client(server: &MockServer) -> PlextracClient {
    PlextracClient::builder()
        .instance_url(server.uri())
        .build()
        .unwrap()
}

/// Client with URL and credentials pre-seeded so flows run prompt-free.
pub fn seeded_client(server: &MockServer) -> PlextracClient {
    let config = Config {
        connection: ConnectionConfig {
            instance_url: Some(server.uri()),
            ..Default::default()
        },
        auth: AuthConfig {
            username: Some("auditor".to_string()),
            password: Some(SecretString::new("hunter2".to_string().into())),
        },
        workflow: WorkflowConfig::default(),
    };
    PlextracClient::builder()
        .from_config(&config)
        .build()
        .unwrap()
}

pub fn sentinel_body() -> Value {
    json!({ "text": SENTINEL })
}

pub fn auth_success(token: &str) -> Value {
    json!({
        "status": "success",
        "tenant_id": "tenant_0",
        "mfa_enabled": false,
        "token": token,
    })
}

pub async fn mount_root_sentinel(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sentinel_body()))
        .mount(server)
        .await;
}

pub async fn mount_authenticate_success(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_success(token)))
        .mount(server)
        .await;
}
