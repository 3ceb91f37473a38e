//! Instance validation and the authentication state machine.
//!
//! These methods drive the [`SessionManager`](crate::auth::SessionManager)
//! through `UrlUnvalidated → UrlValidated → CredentialsCollected →
//! PrimaryAuthPending → MfaPending (optional) → Authenticated`. Every retry
//! is an explicit bounded loop with a continue/abort decision at each
//! iteration; a declined retry surfaces [`ClientError::Aborted`] and only
//! the CLI top level terminates.
//!
//! # Invariants
//! - [`auth_headers`](PlextracClient::auth_headers) never returns headers
//!   for a credential with less than the expiry buffer remaining.
//! - Once the edge layer is validated, the edge header is part of every
//!   outbound request, including the authenticate calls themselves.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{info, warn};

use plextrac_config::constants::EDGE_ACCESS_HEADER;

use crate::client::PlextracClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::AuthenticateResponse;
use crate::prompt::Prompt;
use crate::transport::ApiResponse;

/// Fixed body the unauthenticated root probe answers with when the URL
/// points at a live instance.
pub const ROOT_SENTINEL: &str = "Authenticate at /authenticate";

fn is_sentinel(response: &ApiResponse) -> bool {
    response
        .json()
        .and_then(|v| v.get("text"))
        .and_then(Value::as_str)
        == Some(ROOT_SENTINEL)
}

impl PlextracClient {
    /// Get headers for a credential that will stay valid for at least the
    /// expiry buffer, (re-)authenticating synchronously first if needed.
    ///
    /// Calling this twice in immediate succession authenticates at most
    /// once; within the validity window the existing headers are returned
    /// unchanged.
    pub async fn auth_headers(&mut self, ui: &dyn Prompt) -> Result<HeaderMap> {
        if self.session.needs_reauth() {
            self.authenticate(ui).await?;
        }
        Ok(self.session.headers().clone())
    }

    /// Confirm the configured (or prompted-for) URL answers the root probe
    /// with the expected sentinel before any authentication attempt.
    pub async fn validate_instance_url(&mut self, ui: &dyn Prompt) -> Result<()> {
        loop {
            if !self.session.has_base_url() {
                let url = ui
                    .input("Please enter the full URL of your PlexTrac instance (with protocol)")?;
                self.session.set_base_url(&url);
            } else {
                info!("using instance URL from configuration");
            }

            let base_url = self.session.base_url()?.to_string();
            match endpoints::root(&self.http, &base_url, self.session.headers()).await {
                Ok(response) if is_sentinel(&response) => {
                    info!("validated instance URL");
                    self.session.mark_url_validated();
                    return Ok(());
                }
                Ok(ApiResponse::Raw { .. }) => {
                    // A live instance behind an edge proxy answers the probe
                    // with a non-JSON challenge page instead of the API.
                    if self.session.edge_token().is_some()
                        || ui.confirm(
                            "That URL points at a running PlexTrac instance, but the API did \
                             not respond. There may be an additional network security layer. \
                             Add an edge access token?",
                        )?
                    {
                        return self.validate_edge_layer(ui).await;
                    }
                    // Declining the edge layer means the URL itself is in
                    // question; re-collect it on retry.
                    if !ui.retry("Could not validate instance URL.")? {
                        return Err(ClientError::Aborted);
                    }
                    self.session.clear_edge_token();
                    self.session.clear_base_url();
                }
                Ok(_) => {
                    // JSON, but not the sentinel: wrong service at that URL.
                    if !ui.retry("Could not validate instance URL.")? {
                        return Err(ClientError::Aborted);
                    }
                    self.session.clear_edge_token();
                    self.session.clear_base_url();
                }
                Err(e) if e.is_network_error() => {
                    warn!(error = %e, "instance probe failed");
                    if !ui.retry(
                        "Could not validate URL. Either the API is offline or it was entered \
                         incorrectly. Example: https://company.plextrac.com",
                    )? {
                        return Err(ClientError::Aborted);
                    }
                    self.session.clear_base_url();
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Re-probe the sentinel endpoint with the edge-access header. On
    /// success the header becomes part of every subsequent request; on
    /// failure the stored token is cleared and the user may retry.
    pub async fn validate_edge_layer(&mut self, ui: &dyn Prompt) -> Result<()> {
        loop {
            let token = match self.session.edge_token() {
                Some(token) => {
                    info!("using edge token from configuration");
                    token.expose_secret().to_string()
                }
                None => {
                    let entered = ui.input("Please enter your active 'CF_Authorization' token")?;
                    self.session
                        .set_edge_token(SecretString::new(entered.clone().into()));
                    entered
                }
            };

            // Probe with a provisional header; it only joins the permanent
            // header map once the sentinel answers.
            let value = match HeaderValue::from_str(&token) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    value
                }
                Err(_) => {
                    if !ui.retry("Could not validate instance URL.")? {
                        return Err(ClientError::Aborted);
                    }
                    self.session.clear_edge_token();
                    continue;
                }
            };
            let mut headers = self.session.headers().clone();
            headers.insert(EDGE_ACCESS_HEADER, value);

            let base_url = self.session.base_url()?.to_string();
            match endpoints::root(&self.http, &base_url, &headers).await {
                Ok(response) if is_sentinel(&response) => {
                    self.session.store_edge_header()?;
                    self.session.mark_url_validated();
                    info!("validated instance URL");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) if e.is_network_error() => {
                    warn!(error = %e, "edge-layer probe failed");
                }
                Err(e) => return Err(e),
            }

            if !ui.retry("Could not validate instance URL.")? {
                return Err(ClientError::Aborted);
            }
            self.session.clear_edge_token();
        }
    }

    /// Run the full authentication state machine until a bearer credential
    /// is stored or the user aborts.
    pub async fn authenticate(&mut self, ui: &dyn Prompt) -> Result<()> {
        info!("starting authentication");

        if !self.session.url_validated() {
            self.validate_instance_url(ui).await?;
        }

        loop {
            let (username, password) = self.collect_credentials(ui)?;
            let payload = serde_json::json!({
                "username": username,
                "password": password.expose_secret(),
            });

            let base_url = self.session.base_url()?.to_string();
            let response =
                endpoints::authenticate(&self.http, &base_url, self.session.headers(), &payload)
                    .await?;
            let auth: AuthenticateResponse = response.deserialize()?;

            // The API answers every rejection the same way (bad credentials,
            // missing MFA enrollment, other); do not try to distinguish.
            if !auth.is_success() {
                if !ui.retry("Could not authenticate with entered credentials.")? {
                    return Err(ClientError::Aborted);
                }
                self.session.clear_credentials();
                continue;
            }

            self.session.set_tenant_id(auth.tenant_id.clone());

            let token = if auth.mfa_enabled {
                info!("MFA enabled for user");
                let code = ui.input("Please enter your 6 digit MFA code")?;
                let mfa_payload = serde_json::json!({
                    "code": auth.code,
                    "token": code,
                });
                let mfa_response = endpoints::mfa_authenticate(
                    &self.http,
                    &base_url,
                    self.session.headers(),
                    &mfa_payload,
                )
                .await?;
                let mfa: AuthenticateResponse = mfa_response.deserialize()?;
                if !mfa.is_success() {
                    // A rejected code restarts the whole flow; the
                    // credentials entered earlier are kept and reused.
                    if !ui.retry("Invalid MFA Code.")? {
                        return Err(ClientError::Aborted);
                    }
                    continue;
                }
                mfa.token
            } else {
                auth.token
            };

            let token = token.ok_or_else(|| {
                ClientError::InvalidResponse("authenticate response missing token".to_string())
            })?;
            self.session.set_bearer_token(&token)?;
            self.session.mark_authenticated();
            info!("authenticated");
            return Ok(());
        }
    }

    /// Use pre-supplied credentials or collect them interactively. The
    /// password prompt is non-echoing.
    fn collect_credentials(&mut self, ui: &dyn Prompt) -> Result<(String, SecretString)> {
        let username = match self.session.username() {
            Some(username) => {
                info!("using username from configuration");
                username.to_string()
            }
            None => {
                let entered = ui.input("Please enter your PlexTrac username")?;
                self.session.set_username(entered.clone());
                entered
            }
        };

        let password = match self.session.password() {
            Some(password) => {
                info!("using password from configuration");
                password.clone()
            }
            None => {
                let entered = ui.password("Password")?;
                let secret = SecretString::new(entered.into());
                self.session.set_password(secret.clone());
                secret
            }
        };

        Ok((username, password))
    }
}
