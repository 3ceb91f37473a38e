//! Authenticate and MFA-completion response bodies.

use serde::Deserialize;

/// Response from `POST /api/v1/authenticate` and
/// `POST /api/v1/authenticate/mfa`.
///
/// The API deliberately answers every rejection (bad credentials, missing
/// MFA enrollment, anything else) with the same non-"success" shape, so
/// callers must not try to distinguish rejection causes.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub mfa_enabled: bool,
    /// Correlation value to echo back in the MFA-completion request.
    #[serde(default)]
    pub code: Option<String>,
    /// Bearer credential, present on a completed authentication.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthenticateResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
