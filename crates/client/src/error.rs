//! Error types for the PlexTrac client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during PlexTrac client operations.
///
/// No variant here terminates the process; the CLI top level maps errors to
/// exit codes and decides when to stop.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed and cannot proceed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The user declined a retry prompt, aborting the run.
    #[error("Aborted by user")]
    Aborted,

    /// HTTP request error from the underlying client.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Connection could not be established (refused, DNS, unreachable).
    #[error("Connection failed for '{operation}' at {path}: {message}")]
    ConnectionFailed {
        operation: String,
        path: String,
        message: String,
    },

    /// Request timed out.
    #[error("Request '{operation}' timed out")]
    Timeout { operation: String },

    /// Response did not have the expected structure.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid or missing instance URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Interactive prompt failed (stdin closed, terminal error).
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl ClientError {
    /// Check if this error came from the network layer, as opposed to the
    /// API answering with something unexpected.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ConnectionFailed { .. } | Self::Timeout { .. }
        )
    }

    /// Check if this error indicates authentication failure or user abort.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::Aborted)
    }
}
