//! Client builder for constructing [`PlextracClient`] instances.
//!
//! Responsibilities:
//! - Configure the underlying HTTP client (timeout, TLS verification).
//! - Seed the session manager from configuration.
//!
//! Invariants:
//! - `skip_verify` only affects HTTPS connections; for HTTP URLs a warning
//!   is logged and the flag has no effect.

use std::time::Duration;

use plextrac_config::constants::DEFAULT_TIMEOUT_SECS;
use plextrac_config::{AuthConfig, Config, ConnectionConfig};

use crate::auth::SessionManager;
use crate::client::PlextracClient;
use crate::error::Result;

/// Builder for creating a new [`PlextracClient`].
pub struct PlextracClientBuilder {
    connection: ConnectionConfig,
    auth: AuthConfig,
}

impl Default for PlextracClientBuilder {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl PlextracClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed connection and credential settings from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.connection = config.connection.clone();
        self.auth = config.auth.clone();
        self
    }

    /// Set the instance URL directly.
    pub fn instance_url(mut self, url: String) -> Self {
        self.connection.instance_url = Some(url);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// Only for self-signed or test instances; verification stays on by
    /// default.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.connection.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.connection.timeout = timeout;
        self
    }

    /// Build the [`PlextracClient`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PlextracClient> {
        let timeout = if self.connection.timeout.is_zero() {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            self.connection.timeout
        };

        let mut http_builder = reqwest::Client::builder().timeout(timeout);

        if self.connection.skip_verify {
            let is_https = self
                .connection
                .instance_url
                .as_deref()
                .is_none_or(|url| url.starts_with("https://"));
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs; TLS verification only applies to HTTPS connections"
                );
            }
        }

        let http = http_builder.build()?;
        let session = SessionManager::new(&self.connection, &self.auth);

        Ok(PlextracClient { http, session })
    }
}
