//! PlexTrac API client.
//!
//! [`PlextracClient`] pairs a configured HTTP client with the
//! [`SessionManager`] and exposes the operations the workflow needs. Every
//! API method obtains fresh auth headers first, so credential renewal is
//! checked lazily at the point of use rather than on a schedule.
//!
//! # Submodules
//! - [`builder`]: client construction and HTTP configuration
//! - `session`: URL validation and the authentication state machine
//! - `api`: authenticated workflow endpoints
//!
//! # Invariants
//! - API methods take `&mut self` because any call may trigger a synchronous
//!   re-authentication.

pub mod builder;

mod api;
mod session;

use crate::auth::SessionManager;

/// Client for a single PlexTrac instance.
#[derive(Debug)]
pub struct PlextracClient {
    pub(crate) http: reqwest::Client,
    pub(crate) session: SessionManager,
}

pub use builder::PlextracClientBuilder;

impl PlextracClient {
    /// Create a new client builder.
    pub fn builder() -> PlextracClientBuilder {
        PlextracClientBuilder::new()
    }

    /// Tenant identifier from the last successful authentication.
    pub fn tenant_id(&self) -> Option<&str> {
        self.session.tenant_id()
    }

    /// Read-only access to the session state.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }
}
