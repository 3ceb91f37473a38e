//! Session state and credential lifetime tracking.
//!
//! [`SessionManager`] owns everything the authentication flows mutate: the
//! instance URL, credential material, tenant id, the outbound header map,
//! and the issuance timestamp of the current bearer credential. All field
//! mutation goes through methods here; no other code reaches into the
//! header map directly.
//!
//! The interactive flows that drive this state live in
//! `client/session.rs` — this module stays free of I/O so the expiry and
//! header invariants can be tested in isolation.
//!
//! # Invariants
//! - A bearer credential is valid for [`AUTH_WINDOW_SECS`] from issuance and
//!   is treated as stale once fewer than [`EXPIRY_BUFFER_SECS`] remain.
//! - Once the edge layer is validated, the edge header stays in the header
//!   map for every subsequent request, including authentication itself.
//!
//! [`AUTH_WINDOW_SECS`]: plextrac_config::constants::AUTH_WINDOW_SECS
//! [`EXPIRY_BUFFER_SECS`]: plextrac_config::constants::EXPIRY_BUFFER_SECS

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::{Duration, Instant};

use plextrac_config::constants::{EDGE_ACCESS_HEADER, REAUTH_AFTER_SECS};
use plextrac_config::{AuthConfig, ConnectionConfig};

use crate::error::{ClientError, Result};

/// Mutable session state for one process run.
#[derive(Debug)]
pub struct SessionManager {
    base_url: Option<String>,
    edge_token: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
    tenant_id: Option<String>,
    headers: HeaderMap,
    last_auth: Option<Instant>,
    url_validated: bool,
}

impl SessionManager {
    /// Create a session seeded from configuration. Pre-set values are used
    /// as-is; anything missing is collected interactively later.
    pub fn new(connection: &ConnectionConfig, auth: &AuthConfig) -> Self {
        Self {
            base_url: connection.instance_url.as_deref().map(normalize_base_url),
            edge_token: connection.edge_token.clone(),
            username: auth.username.clone(),
            password: auth.password.clone(),
            tenant_id: None,
            headers: HeaderMap::new(),
            last_auth: None,
            url_validated: false,
        }
    }

    // ---------- instance URL ----------

    /// The validated (or configured) base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when no URL has been supplied yet;
    /// flows must collect one before issuing requests.
    pub fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(|| ClientError::InvalidUrl("no instance URL set".to_string()))
    }

    pub fn has_base_url(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = Some(normalize_base_url(url));
    }

    /// Drop the URL so the validation loop prompts for a corrected one.
    pub fn clear_base_url(&mut self) {
        self.base_url = None;
        self.url_validated = false;
    }

    pub fn url_validated(&self) -> bool {
        self.url_validated
    }

    pub fn mark_url_validated(&mut self) {
        self.url_validated = true;
    }

    // ---------- edge-access layer ----------

    pub fn edge_token(&self) -> Option<&SecretString> {
        self.edge_token.as_ref()
    }

    pub fn set_edge_token(&mut self, token: SecretString) {
        self.edge_token = Some(token);
    }

    pub fn clear_edge_token(&mut self) {
        self.edge_token = None;
        self.headers.remove(EDGE_ACCESS_HEADER);
    }

    /// Store the validated edge token into the permanent header map so it
    /// rides on every subsequent request.
    pub fn store_edge_header(&mut self) -> Result<()> {
        let token = self
            .edge_token
            .as_ref()
            .ok_or_else(|| ClientError::InvalidResponse("no edge token to store".to_string()))?;
        let mut value = HeaderValue::from_str(token.expose_secret())
            .map_err(|e| ClientError::InvalidResponse(format!("invalid edge token: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(EDGE_ACCESS_HEADER, value);
        Ok(())
    }

    // ---------- credentials ----------

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: String) {
        self.username = Some(username);
    }

    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = Some(password);
    }

    /// Discard credential material after a rejected authentication attempt,
    /// forcing the retry to re-collect it.
    pub fn clear_credentials(&mut self) {
        self.username = None;
        self.password = None;
        self.tenant_id = None;
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn set_tenant_id(&mut self, tenant_id: Option<String>) {
        self.tenant_id = tenant_id;
    }

    // ---------- bearer credential ----------

    /// Current outbound headers. Only meaningful once authentication has
    /// succeeded; `PlextracClient::auth_headers` guarantees freshness.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Store the bearer credential returned by the authenticate endpoint.
    /// The API expects the raw token in `Authorization`, no scheme prefix.
    pub fn set_bearer_token(&mut self, token: &str) -> Result<()> {
        let mut value = HeaderValue::from_str(token)
            .map_err(|e| ClientError::InvalidResponse(format!("invalid bearer token: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Record the issuance time of the current bearer credential.
    pub fn mark_authenticated(&mut self) {
        self.last_auth = Some(Instant::now());
    }

    /// Whether a full (re-)authentication must happen before headers can be
    /// handed to a caller.
    pub fn needs_reauth(&self) -> bool {
        match self.last_auth {
            None => true,
            Some(issued) => is_stale(issued.elapsed()),
        }
    }
}

/// Normalize a base URL by removing trailing slashes, preventing double
/// slashes when concatenating endpoint paths.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// A credential older than the renewal threshold is stale even though the
/// server-side window has not closed yet; the remaining margin is reserved
/// for the request that is about to use it.
fn is_stale(elapsed: Duration) -> bool {
    elapsed > Duration::from_secs(REAUTH_AFTER_SECS)
}
