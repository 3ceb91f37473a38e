//! Configuration types for the PlexTrac CLI.
//!
//! Responsibilities:
//! - Define the connection, credential, and workflow settings consumed by the
//!   client and CLI crates.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader`).
//! - Persisting anything to disk; credentials live in memory for the duration
//!   of a single run only.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental
//!   logging.
//! - Every field is optional; anything missing is collected interactively.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Fully assembled configuration for one CLI run.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub workflow: WorkflowConfig,
}

/// Connection settings for the target PlexTrac instance.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Root URL of the instance, e.g. `https://company.plextrac.com`.
    pub instance_url: Option<String>,
    /// Edge-access token for instances behind an additional network
    /// security layer.
    pub edge_token: Option<SecretString>,
    /// Skip TLS certificate verification (self-signed / test instances).
    pub skip_verify: bool,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            instance_url: None,
            edge_token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Credential material supplied ahead of time. Anything left unset is
/// prompted for during authentication.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

/// Settings for the bulk-update workflow itself.
#[derive(Debug, Clone, Default)]
pub struct WorkflowConfig {
    /// Name of the client whose reports should be updated. When unset or not
    /// matching exactly one client, the user picks from a list.
    pub client_name: Option<String>,
}
