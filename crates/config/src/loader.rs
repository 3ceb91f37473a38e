//! Configuration loading from `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load a `.env` file (if present) before anything reads the environment.
//! - Apply `PLEXTRAC_*` environment variables with empty/whitespace filtering.
//! - Accept programmatic overrides (CLI flags) that take precedence over the
//!   environment.
//! - Validate the instance URL shape and the timeout range at build time.
//!
//! Does NOT handle:
//! - Interactive prompting for missing values (the client crate does that
//!   during authentication).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Overrides applied via `with_*` win over environment values.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{AuthConfig, Config, ConnectionConfig, WorkflowConfig};

/// Errors raised while assembling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid instance URL '{url}': {message}")]
    InvalidInstanceUrl { url: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. The returned value is trimmed.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Builder-style loader assembling a [`Config`] from the environment and
/// programmatic overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    instance_url: Option<String>,
    edge_token: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
    client_name: Option<String>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory, if one exists.
    ///
    /// Must run before CLI parsing or `from_env` so the file can seed the
    /// process environment. A missing file is not an error. Setting
    /// `DOTENV_DISABLED=1` skips the file entirely, which keeps integration
    /// tests hermetic.
    pub fn load_dotenv() -> Result<(), ConfigError> {
        if std::env::var_os("DOTENV_DISABLED").is_some_and(|v| v == "1") {
            return Ok(());
        }
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::from(e)),
        }
    }

    /// Apply `PLEXTRAC_*` environment variables to the loader.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = env_var_or_none("PLEXTRAC_INSTANCE_URL") {
            self.instance_url = Some(url);
        }
        if let Some(token) = env_var_or_none("PLEXTRAC_CF_TOKEN") {
            self.edge_token = Some(SecretString::new(token.into()));
        }
        if let Some(username) = env_var_or_none("PLEXTRAC_USERNAME") {
            self.username = Some(username);
        }
        if let Some(password) = env_var_or_none("PLEXTRAC_PASSWORD") {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(name) = env_var_or_none("PLEXTRAC_CLIENT_NAME") {
            self.client_name = Some(name);
        }
        if let Some(skip) = env_var_or_none("PLEXTRAC_SKIP_VERIFY") {
            self.skip_verify = Some(skip.parse().map_err(|_| ConfigError::InvalidValue {
                var: "PLEXTRAC_SKIP_VERIFY".to_string(),
                message: "must be true or false".to_string(),
            })?);
        }
        if let Some(timeout) = env_var_or_none("PLEXTRAC_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "PLEXTRAC_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(self)
    }

    pub fn with_instance_url(mut self, url: String) -> Self {
        self.instance_url = Some(url);
        self
    }

    pub fn with_edge_token(mut self, token: SecretString) -> Self {
        self.edge_token = Some(token);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    pub fn with_client_name(mut self, name: String) -> Self {
        self.client_name = Some(name);
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the final [`Config`].
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(ref url) = self.instance_url {
            let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidInstanceUrl {
                url: url.clone(),
                message: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidInstanceUrl {
                    url: url.clone(),
                    message: "scheme must be http or https".to_string(),
                });
            }
        }

        let timeout = self
            .timeout
            .unwrap_or_else(|| ConnectionConfig::default().timeout);
        if timeout.as_secs() == 0 || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: "PLEXTRAC_TIMEOUT".to_string(),
                message: format!("must be between 1 and {} seconds", MAX_TIMEOUT_SECS),
            });
        }

        Ok(Config {
            connection: ConnectionConfig {
                instance_url: self.instance_url,
                edge_token: self.edge_token,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig {
                username: self.username,
                password: self.password,
            },
            workflow: WorkflowConfig {
                client_name: self.client_name,
            },
        })
    }
}
